//! # Product Actor
//!
//! Owns the product catalog and its stock counts.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`]
//! - [`actions`] - [`ProductAction`] and [`ProductActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Stock reservation
//!
//! `Reserve` is the only way stock goes down during ordering. A multi-line order sends all of
//! its reservations as one transaction, so either every line is reserved or none is:
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use smart_inventory::clients::ProductClient;
//! use smart_inventory::model::{OrderLine, ProductCreate};
//! use smart_inventory::product_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = product_actor::new(32);
//!     let client = ProductClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let pen = client.create_product(ProductCreate::new("Pen", Decimal::new(150, 2), 10)).await?;
//!     let ink = client.create_product(ProductCreate::new("Ink", Decimal::new(400, 2), 1)).await?;
//!
//!     let short = client
//!         .reserve_lines(&[OrderLine::new(pen, 2), OrderLine::new(ink, 5)])
//!         .await;
//!     assert!(short.is_err());
//!     assert_eq!(client.check_stock(pen).await?, 10);
//!
//!     let prices = client.reserve_lines(&[OrderLine::new(pen, 2)]).await?;
//!     assert_eq!(prices, vec![Decimal::new(150, 2)]);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Product;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(buffer_size)
}
