//! # System Lifecycle
//!
//! Starting, wiring and stopping the three actors.
//!
//! Actors are created without dependencies and receive them through `run(context)`:
//!
//! | Actor | Context |
//! |-------|---------|
//! | Product | `()` |
//! | Category | [`ProductClient`](crate::clients::ProductClient), for the delete guard |
//! | Order | [`OrderContext`](crate::order_actor::OrderContext): product client, order number issuer |
//!
//! The graph has no cycles, so shutdown only has to drop the clients the system owns. Each
//! actor sees its mailbox close and exits, which in turn drops the product client clones held
//! by the Category and Order actors and lets the Product actor finish last.
//!
//! ```rust,no_run
//! use smart_inventory::config::Settings;
//! use smart_inventory::lifecycle::InventorySystem;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let system = InventorySystem::start(&Settings::default()).await?;
//! let low = system.catalog().low_stock().await?;
//! println!("{} products need restocking", low.len());
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

mod seed;
mod system;

pub use seed::seed_catalog;
pub use system::{InventorySystem, SystemError};
