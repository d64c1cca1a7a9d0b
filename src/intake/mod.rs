//! # Order Intake
//!
//! Turns a guest's checkout submission into a stored order.
//!
//! [`OrderIntake::place_order`] is one unit of work. The submission is checked, then a single
//! `create` goes to the Order actor, whose `on_create` hook reserves every line in one Product
//! transaction before the order row exists. So either the order, its items and every stock
//! decrement all exist afterwards, or none of them do.
//!
//! The handler holds no state between calls and takes no locks. Concurrent submissions for the
//! same product are serialised by the Product actor's mailbox, which is what keeps two orders
//! from selling the same unit.
//!
//! | Outcome | Result |
//! |---------|--------|
//! | lists missing / lengths differ | `Validation("Invalid order data. Please try again.")` |
//! | bad guest name or email | `Validation(..)` |
//! | unknown product, or quantity > stock | `StockUnavailable` |
//! | actor unreachable, no free order number | `Store` (logged) |
//!
//! Submitting the same form twice places two orders.

pub mod error;
pub mod submission;

pub use error::*;
pub use submission::OrderSubmission;

use crate::clients::OrderClient;
use crate::model::{OrderCreate, OrderId};
use actor_framework::ActorClient;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{error, info, instrument, warn};

/// What the guest gets back after a successful checkout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedOrder {
    pub order_id: OrderId,
    pub order_number: String,
    pub total_amount: Decimal,
}

/// The order intake handler.
#[derive(Clone)]
pub struct OrderIntake {
    orders: OrderClient,
}

impl OrderIntake {
    pub fn new(orders: OrderClient) -> Self {
        Self { orders }
    }

    #[instrument(skip(self, submission), fields(guest = %submission.guest_email))]
    pub async fn place_order(&self, submission: OrderSubmission) -> Result<PlacedOrder, IntakeError> {
        let lines = submission.lines().inspect_err(|e| {
            warn!(error = %e, "Rejected order submission");
        })?;

        let params = OrderCreate {
            guest_name: submission.guest_name,
            guest_email: submission.guest_email,
            lines,
        };

        let order_id = self
            .orders
            .create_order(params)
            .await
            .map_err(|e| log_failure(e.into()))?;

        let order = self
            .orders
            .get(order_id)
            .await
            .map_err(|e| log_failure(e.into()))?
            .ok_or_else(|| log_failure(IntakeError::Store(format!("{order_id} missing after create"))))?;

        info!(
            %order_id,
            order_number = %order.order_number,
            total = %order.total_amount,
            "Order placed"
        );
        Ok(PlacedOrder {
            order_id,
            order_number: order.order_number,
            total_amount: order.total_amount,
        })
    }
}

fn log_failure(e: IntakeError) -> IntakeError {
    match &e {
        IntakeError::Store(detail) => error!(%detail, "Order could not be stored"),
        other => warn!(error = %other, "Order rejected"),
    }
    e
}
