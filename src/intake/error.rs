//! Order intake failures and the messages shown to the guest.

use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use thiserror::Error;

pub const INVALID_ORDER_DATA: &str = "Invalid order data. Please try again.";
pub const INVALID_GUEST_DETAILS: &str = "Please provide a valid name and email address.";
pub const STOCK_UNAVAILABLE: &str =
    "One or more products are unavailable in the requested quantity.";
pub const STORE_FAILURE: &str = "An error occurred while processing your order.";

/// Why a submission did not become an order. In every case nothing was changed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IntakeError {
    /// Malformed input the guest can correct. Carries the message to show.
    #[error("{0}")]
    Validation(String),

    /// A product is unknown or has less stock than requested.
    #[error("Stock unavailable: {0}")]
    StockUnavailable(ProductError),

    /// The order could not be stored. The detail is for logs only.
    #[error("Store error: {0}")]
    Store(String),
}

impl IntakeError {
    /// The text to render back to the guest.
    pub fn user_message(&self) -> &str {
        match self {
            IntakeError::Validation(message) => message,
            IntakeError::StockUnavailable(_) => STOCK_UNAVAILABLE,
            IntakeError::Store(_) => STORE_FAILURE,
        }
    }
}

impl From<OrderError> for IntakeError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::ValidationError(_) => IntakeError::Validation(INVALID_GUEST_DETAILS.into()),
            OrderError::InsufficientStock(cause) => IntakeError::StockUnavailable(cause),
            other => IntakeError::Store(other.to_string()),
        }
    }
}
