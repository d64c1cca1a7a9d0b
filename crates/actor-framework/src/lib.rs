//! # Actor Framework
//!
//! Building blocks for keeping stateful resources (products, categories, orders) behind
//! actors. Each resource type is a **Resource-Oriented** table with a uniform CRUD surface,
//! and each table is owned by exactly one **actor** that applies requests one at a time.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]): the row type, its create/update DTOs, its custom actions
//!    and its lifecycle hooks.
//! 2. **Runtime** ([`ResourceActor`]): the task that owns the rows and serves requests.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]): cloneable handles that send requests
//!    and await replies.
//!
//! ## Requests
//!
//! | Request | Effect |
//! |---------|--------|
//! | `create` | allocate the next id, run `on_create`, insert |
//! | `get` / `list` | read one row / every row in id order |
//! | `update` | run `on_update` on a copy, keep it on success |
//! | `delete` | run `on_delete`, remove on success |
//! | `perform_action` | run one custom action |
//! | `transaction` | run several actions, keep all or none |
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Item { id: u32, name: String, stock: u32 }
//!
//! #[derive(Debug)] struct ItemCreate { name: String, stock: u32 }
//! #[derive(Debug)] struct ItemUpdate { name: Option<String> }
//! #[derive(Debug)] enum ItemAction { Take(u32) }
//!
//! #[derive(Debug, thiserror::Error, PartialEq)]
//! enum ItemError {
//!     #[error("only {available} left")]
//!     Short { available: u32 },
//! }
//!
//! #[async_trait]
//! impl ActorEntity for Item {
//!     type Id = u32;
//!     type Create = ItemCreate;
//!     type Update = ItemUpdate;
//!     type Action = ItemAction;
//!     type ActionResult = u32;
//!     type Context = ();
//!     type Error = ItemError;
//!
//!     fn from_create_params(id: u32, params: ItemCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, name: params.name, stock: params.stock })
//!     }
//!
//!     async fn on_update(&mut self, update: ItemUpdate, _: &()) -> Result<(), Self::Error> {
//!         if let Some(name) = update.name { self.name = name; }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: ItemAction, _: &()) -> Result<u32, Self::Error> {
//!         match action {
//!             ItemAction::Take(n) if n > self.stock => Err(ItemError::Short { available: self.stock }),
//!             ItemAction::Take(n) => { self.stock -= n; Ok(self.stock) }
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, items) = ResourceActor::<Item>::new(16);
//!     tokio::spawn(actor.run(()));
//!
//!     let pen = items.create(ItemCreate { name: "Pen".into(), stock: 5 }).await.unwrap();
//!     let ink = items.create(ItemCreate { name: "Ink".into(), stock: 1 }).await.unwrap();
//!
//!     // The second take fails, so the first one is not kept either.
//!     let err = items
//!         .transaction(vec![(pen, ItemAction::Take(2)), (ink, ItemAction::Take(3))])
//!         .await
//!         .unwrap_err();
//!     assert_eq!(err.entity_error::<ItemError>(), Some(&ItemError::Short { available: 1 }));
//!     assert_eq!(items.get(pen).await.unwrap().unwrap().stock, 5);
//!
//!     assert!(matches!(items.get(99).await, Ok(None)));
//!     assert!(matches!(items.perform_action(99, ItemAction::Take(1)).await, Err(FrameworkError::NotFound(_))));
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies reach an entity through `run(context)`, not `new()`. All actors can therefore
//! be created first, and each one is started with clients of the actors it calls. An order
//! actor started with a product client can reserve stock from inside `on_create`.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient` from scripted expectations, so code
//! that calls an actor can be tested without the actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use crate::tracing::setup_tracing;
