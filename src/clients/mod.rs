//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Each wrapper implements [`ActorClient`](actor_framework::ActorClient) for `get`, `list` and
//! `delete`, and turns framework failures back into the resource's own error enum.

pub mod category_client;
pub mod order_client;
pub mod product_client;

pub use category_client::*;
pub use order_client::*;
pub use product_client::*;
