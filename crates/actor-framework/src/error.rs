//! # Framework Errors
//!
//! Errors shared by every actor and client. Entity-specific failures travel inside
//! [`FrameworkError::EntityError`] and can be recovered with
//! [`FrameworkError::entity_error`].

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Returns the typed entity error carried by an `EntityError`, if it is an `E`.
    ///
    /// ```rust
    /// use actor_framework::FrameworkError;
    ///
    /// #[derive(Debug, thiserror::Error, PartialEq)]
    /// #[error("out of stock")]
    /// struct OutOfStock;
    ///
    /// let err = FrameworkError::EntityError(Box::new(OutOfStock));
    /// assert_eq!(err.entity_error::<OutOfStock>(), Some(&OutOfStock));
    /// assert!(FrameworkError::ActorClosed.entity_error::<OutOfStock>().is_none());
    /// ```
    pub fn entity_error<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            FrameworkError::EntityError(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }
}
