//! # Category Actor
//!
//! Owns product categories. It depends on the Product actor (its context is a
//! [`ProductClient`](crate::clients::ProductClient)) only to refuse deleting a category that
//! products still reference. The Product actor never calls back, so the dependency graph stays
//! acyclic and shutdown by dropping clients works.

pub mod entity;
pub mod error;

pub use entity::CategoryAction;
pub use error::*;

use crate::model::Category;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Category actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Category>, ResourceClient<Category>) {
    ResourceActor::new(buffer_size)
}
