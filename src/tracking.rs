//! # Order Tracking
//!
//! The guest-facing order summary: a stored order with every line's product name resolved.
//! Reached by id after checkout, or by order number from the tracking form.

use crate::clients::{OrderClient, ProductClient};
use crate::model::{Order, OrderId, OrderItem, ProductId};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use actor_framework::ActorClient;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, instrument};

/// Shown for a line whose product has since been removed from the catalog.
pub const UNKNOWN_PRODUCT: &str = "Unknown Product";
pub const ORDER_NOT_FOUND: &str =
    "Order not found. Please check the order number and try again.";

#[derive(Debug, Error)]
pub enum TrackingError {
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error(transparent)]
    Product(#[from] ProductError),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryLine {
    #[serde(flatten)]
    pub item: OrderItem,
    pub product_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub id: OrderId,
    pub order_number: String,
    pub order_date: DateTime<Utc>,
    pub guest_name: String,
    pub guest_email: String,
    pub total_amount: Decimal,
    pub lines: Vec<SummaryLine>,
}

#[derive(Clone)]
pub struct OrderTracking {
    orders: OrderClient,
    products: ProductClient,
}

impl OrderTracking {
    pub fn new(orders: OrderClient, products: ProductClient) -> Self {
        Self { orders, products }
    }

    #[instrument(skip(self))]
    pub async fn summary(&self, id: OrderId) -> Result<Option<OrderSummary>, TrackingError> {
        match self.orders.get(id).await? {
            Some(order) => Ok(Some(self.resolve(order).await?)),
            None => Ok(None),
        }
    }

    /// Looks an order up by its number. A blank number finds nothing.
    #[instrument(skip(self))]
    pub async fn track(&self, order_number: &str) -> Result<Option<OrderSummary>, TrackingError> {
        let order_number = order_number.trim();
        if order_number.is_empty() {
            return Ok(None);
        }
        match self.orders.find_by_number(order_number).await? {
            Some(order) => Ok(Some(self.resolve(order).await?)),
            None => {
                debug!(order_number, "No order with this number");
                Ok(None)
            }
        }
    }

    async fn resolve(&self, order: Order) -> Result<OrderSummary, TrackingError> {
        let names: HashMap<ProductId, String> = self
            .products
            .list_products()
            .await?
            .into_iter()
            .map(|p| (p.id, p.name))
            .collect();

        let lines = order
            .items
            .into_iter()
            .map(|item| {
                let product_name = names
                    .get(&item.product_id)
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN_PRODUCT.to_string());
                SummaryLine { item, product_name }
            })
            .collect();

        Ok(OrderSummary {
            id: order.id,
            order_number: order.order_number,
            order_date: order.order_date,
            guest_name: order.guest_name,
            guest_email: order.guest_email,
            total_amount: order.total_amount,
            lines,
        })
    }
}
