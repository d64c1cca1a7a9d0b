use crate::model::ProductId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use super::not_blank;
use validator::Validate;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderItemId(pub u32);

/// One line of a placed order. `unit_price` is the product price when the order was placed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl OrderItem {
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// A guest order.
///
/// # Actor Framework
/// Managed by a [`ResourceActor`](actor_framework::ResourceActor). All of the interesting work
/// happens in `on_create`: the number, timestamp, items and total are filled in there, and the
/// order is never stored if stock could not be reserved. Placed orders are immutable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub order_number: String,
    pub order_date: DateTime<Utc>,
    pub guest_name: String,
    pub guest_email: String,
    pub total_amount: Decimal,
    pub items: Vec<OrderItem>,
    /// Requested lines waiting for `on_create`; always empty on a stored order.
    #[serde(skip)]
    pub(crate) pending_lines: Vec<OrderLine>,
}

/// A requested product and a strictly positive quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// Payload for creating a new order.
#[derive(Debug, Clone, Validate)]
pub struct OrderCreate {
    #[validate(length(min = 1, max = 100), custom(function = "not_blank"))]
    pub guest_name: String,
    #[validate(email, length(max = 100))]
    pub guest_email: String,
    pub lines: Vec<OrderLine>,
}
