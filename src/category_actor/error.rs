//! Error types for the Category actor.

use crate::model::CategoryId;
use crate::product_actor::ProductError;
use actor_framework::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CategoryError {
    #[error("Category not found: {0}")]
    NotFound(String),

    #[error("Category validation error: {0}")]
    ValidationError(String),

    /// Deleting would orphan products that still point at the category.
    #[error("Cannot delete {category_id}: {products} product(s) still belong to it")]
    CategoryInUse {
        category_id: CategoryId,
        products: usize,
    },

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for CategoryError {
    fn from(e: FrameworkError) -> Self {
        if let Some(inner) = e.entity_error::<CategoryError>() {
            return inner.clone();
        }
        match e {
            FrameworkError::NotFound(id) => CategoryError::NotFound(id),
            other => CategoryError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<ProductError> for CategoryError {
    fn from(e: ProductError) -> Self {
        CategoryError::ActorCommunicationError(e.to_string())
    }
}
