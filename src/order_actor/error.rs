//! Error types for the Order actor.

use crate::model::OrderId;
use crate::product_actor::ProductError;
use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// Guest details failed validation.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// A line names a product that does not exist or asks for more than is in stock.
    #[error("Insufficient stock: {0}")]
    InsufficientStock(ProductError),

    /// Placed orders cannot be removed.
    #[error("{0} has been placed and cannot be deleted")]
    Immutable(OrderId),

    /// Every candidate order number for the day was already taken.
    #[error("No free order number after {attempts} attempts")]
    OrderNumberExhausted { attempts: u32 },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<ProductError> for OrderError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(_)
            | ProductError::InsufficientStock { .. }
            | ProductError::InvalidQuantity(_) => OrderError::InsufficientStock(e),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        if let Some(inner) = e.entity_error::<OrderError>() {
            return inner.clone();
        }
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
