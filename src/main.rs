//! Demo run: start the store with the starter catalog, check out as a guest twice (once over
//! AJAX, once more than is in stock), then report low stock and shut down.

use actor_framework::setup_tracing;
use smart_inventory::config::Settings;
use smart_inventory::intake::OrderSubmission;
use smart_inventory::lifecycle::InventorySystem;
use smart_inventory::presentation::{is_ajax, respond};
use tracing::{info, info_span, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = Settings::load(None)?;
    setup_tracing(&settings.log.filter)?;

    info!("Starting smart inventory");
    let system = InventorySystem::start(&settings).await?;
    let catalog = system.catalog();
    let intake = system.intake();

    for product in catalog.available_for_order().await? {
        info!(product_id = %product.id, name = %product.name, stock = product.quantity, "On sale");
    }

    let checkout = OrderSubmission {
        guest_name: "Ada Lovelace".into(),
        guest_email: "ada@example.com".into(),
        product_ids: Some(vec![1, 2, 3]),
        quantities: Some(vec![1, 0, 2]),
    };
    let result = intake
        .place_order(checkout)
        .instrument(info_span!("checkout", guest = "ada"))
        .await;
    info!(response = ?respond(&result, is_ajax(Some("XMLHttpRequest"))), "AJAX checkout");

    let tracking = system.tracking();
    if let Ok(placed) = &result {
        if let Some(summary) = tracking.track(&placed.order_number).await? {
            for line in &summary.lines {
                info!(product = %line.product_name, quantity = line.item.quantity, "Ordered");
            }
        }
    }

    let greedy = OrderSubmission {
        guest_name: "Charles Babbage".into(),
        guest_email: "charles@example.com".into(),
        product_ids: Some(vec![1]),
        quantities: Some(vec![500]),
    };
    let result = intake
        .place_order(greedy)
        .instrument(info_span!("checkout", guest = "charles"))
        .await;
    info!(response = ?respond(&result, is_ajax(None)), "Form checkout");

    for product in catalog.low_stock().await? {
        info!(
            product_id = %product.id,
            stock = product.quantity,
            threshold = product.low_stock_threshold,
            "Low stock"
        );
    }

    drop(catalog);
    drop(intake);
    drop(tracking);
    system.shutdown().await?;

    info!("Smart inventory stopped");
    Ok(())
}
