//! # Order Actor
//!
//! Stores placed guest orders. Creating an order is the inventory's unit of work: see
//! [`entity`] for how stock is reserved before the row exists.
//!
//! - [`entity`] - `ActorEntity` for [`Order`] and its [`OrderContext`]
//! - [`number`] - [`OrderNumberIssuer`]
//! - [`error`] - [`OrderError`]

pub mod entity;
pub mod error;
pub mod number;

pub use entity::{OrderAction, OrderContext, OrderUpdate};
pub use error::*;
pub use number::OrderNumberIssuer;

use crate::model::Order;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size)
}
