//! [`ActorEntity`] implementation for [`Order`].
//!
//! Placing an order is a single `create` request. The Order actor runs [`Order::on_create`]
//! before storing the row, and that hook reserves every line in one Product transaction. If the
//! reservation fails the hook returns an error, the framework drops the half-built order, and no
//! product quantity has changed.

use super::error::OrderError;
use super::number::OrderNumberIssuer;
use crate::clients::ProductClient;
use crate::model::{Order, OrderCreate, OrderId, OrderItem, OrderItemId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};
use validator::Validate;

/// Dependencies of the order hooks.
#[derive(Clone)]
pub struct OrderContext {
    pub products: ProductClient,
    pub numbers: Arc<OrderNumberIssuer>,
    pub item_ids: Arc<AtomicU32>,
}

impl OrderContext {
    pub fn new(products: ProductClient, numbers: Arc<OrderNumberIssuer>) -> Self {
        Self {
            products,
            numbers,
            item_ids: Arc::new(AtomicU32::new(1)),
        }
    }
}

/// Placed orders are immutable.
#[derive(Debug, Clone)]
pub enum OrderUpdate {}

#[derive(Debug, Clone)]
pub enum OrderAction {}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = ();
    type Context = OrderContext;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        params
            .validate()
            .map_err(|e| OrderError::ValidationError(e.to_string()))?;
        Ok(Self {
            id,
            order_number: String::new(),
            order_date: Utc::now(),
            guest_name: params.guest_name,
            guest_email: params.guest_email,
            total_amount: Decimal::ZERO,
            items: Vec::new(),
            pending_lines: params.lines,
        })
    }

    /// Numbers the order, reserves its lines and prices them.
    ///
    /// # Errors
    /// * `InsufficientStock` - a product is unknown or short. No stock was taken.
    /// * `OrderNumberExhausted` - no free order number.
    /// * `ActorCommunicationError` - the Product actor could not be reached.
    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), Self::Error> {
        let lines = std::mem::take(&mut self.pending_lines);
        self.order_date = Utc::now();
        self.order_number = ctx.numbers.issue(self.order_date)?;
        debug!(order_number = %self.order_number, lines = lines.len(), "Reserving order lines");

        let prices = match ctx.products.reserve_lines(&lines).await {
            Ok(prices) => prices,
            Err(e) => {
                warn!(order_number = %self.order_number, error = %e, "Reservation failed");
                ctx.numbers.release(&self.order_number);
                return Err(e.into());
            }
        };

        self.items = lines
            .iter()
            .zip(prices)
            .map(|(line, unit_price)| OrderItem {
                id: OrderItemId(ctx.item_ids.fetch_add(1, Ordering::SeqCst)),
                order_id: self.id,
                product_id: line.product_id,
                quantity: line.quantity,
                unit_price,
            })
            .collect();
        self.total_amount = self.items.iter().map(OrderItem::line_total).sum();

        info!(
            order_number = %self.order_number,
            items = self.items.len(),
            total = %self.total_amount,
            "Order priced"
        );
        Ok(())
    }

    async fn on_delete(&self, _ctx: &OrderContext) -> Result<(), Self::Error> {
        warn!(order_id = %self.id, order_number = %self.order_number, "Refused to delete placed order");
        Err(OrderError::Immutable(self.id))
    }

    async fn on_update(&mut self, update: OrderUpdate, _ctx: &OrderContext) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &OrderContext,
    ) -> Result<(), Self::Error> {
        match action {}
    }
}
