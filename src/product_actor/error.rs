//! Error types for the Product actor.

use crate::model::ProductId;
use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The requested quantity exceeds the available stock.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    /// Zero units, or a release that would overflow the counter.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// The product data provided is invalid.
    #[error("Product validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ProductError {
    fn from(e: FrameworkError) -> Self {
        if let Some(inner) = e.entity_error::<ProductError>() {
            return inner.clone();
        }
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_error_is_recovered() {
        let short = ProductError::InsufficientStock {
            product_id: ProductId(3),
            requested: 5,
            available: 2,
        };
        let wrapped = FrameworkError::EntityError(Box::new(short.clone()));
        assert_eq!(ProductError::from(wrapped), short);
    }

    #[test]
    fn test_framework_failures_map_to_variants() {
        assert_eq!(
            ProductError::from(FrameworkError::NotFound("product_9".into())),
            ProductError::NotFound("product_9".into())
        );
        assert!(matches!(
            ProductError::from(FrameworkError::ActorClosed),
            ProductError::ActorCommunicationError(_)
        ));
    }
}
