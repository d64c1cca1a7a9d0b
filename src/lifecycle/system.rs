use super::seed::seed_catalog;
use crate::catalog::{Catalog, CatalogError};
use crate::clients::{CategoryClient, OrderClient, ProductClient};
use crate::config::Settings;
use crate::intake::OrderIntake;
use crate::order_actor::{OrderContext, OrderNumberIssuer};
use crate::tracking::OrderTracking;
use crate::{category_actor, order_actor, product_actor};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Seeding the catalog failed: {0}")]
    Seed(#[from] CatalogError),

    #[error("Actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}

/// The running inventory actors and the clients that reach them.
pub struct InventorySystem {
    pub product_client: ProductClient,
    pub category_client: CategoryClient,
    pub order_client: OrderClient,

    /// Awaited in this order on shutdown: dependents first, Product last.
    handles: Vec<JoinHandle<()>>,
}

impl InventorySystem {
    /// Spawns the actors with an empty store. Must be called inside a Tokio runtime.
    pub fn new(settings: &Settings) -> Self {
        let buffer_size = settings.actors.buffer_size;

        let (product_actor, product_inner) = product_actor::new(buffer_size);
        let (category_actor, category_inner) = category_actor::new(buffer_size);
        let (order_actor, order_inner) = order_actor::new(buffer_size);

        let product_client = ProductClient::new(product_inner);
        let numbers = Arc::new(OrderNumberIssuer::new(settings.orders.number_attempts));

        let product_handle = tokio::spawn(product_actor.run(()));
        let category_handle = tokio::spawn(category_actor.run(product_client.clone()));
        let order_handle = tokio::spawn(
            order_actor.run(OrderContext::new(product_client.clone(), numbers)),
        );

        info!(buffer_size, "Inventory actors started");
        Self {
            product_client,
            category_client: CategoryClient::new(category_inner),
            order_client: OrderClient::new(order_inner),
            handles: vec![order_handle, category_handle, product_handle],
        }
    }

    /// [`new`](Self::new), then loads the starter catalog if `catalog.seed` is set.
    pub async fn start(settings: &Settings) -> Result<Self, SystemError> {
        let system = Self::new(settings);
        if settings.catalog.seed {
            seed_catalog(&system.catalog()).await?;
        }
        Ok(system)
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.product_client.clone(), self.category_client.clone())
    }

    pub fn intake(&self) -> OrderIntake {
        OrderIntake::new(self.order_client.clone())
    }

    pub fn tracking(&self) -> OrderTracking {
        OrderTracking::new(self.order_client.clone(), self.product_client.clone())
    }

    /// Closes every mailbox and waits for the actors to drain.
    ///
    /// Any [`Catalog`], [`OrderIntake`], [`OrderTracking`] or client clone handed out earlier keeps its actor
    /// alive, so drop those first or this waits for them.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down inventory system");

        drop(self.order_client);
        drop(self.category_client);
        drop(self.product_client);

        for handle in self.handles {
            handle.await.inspect_err(|e| error!(error = %e, "Actor task failed"))?;
        }

        info!("Inventory system stopped");
        Ok(())
    }
}
