//! Starter catalog for a fresh store.

use crate::catalog::{Catalog, CatalogError};
use crate::model::{CategoryCreate, ProductCreate};
use rust_decimal::Decimal;
use tracing::info;

struct SeedProduct {
    name: &'static str,
    cents: i64,
    quantity: u32,
    low_stock_threshold: u32,
}

const SEED: [(&str, &str, SeedProduct); 3] = [
    (
        "Electronics",
        "Electronic devices and gadgets",
        SeedProduct { name: "Laptop", cents: 99999, quantity: 15, low_stock_threshold: 5 },
    ),
    (
        "Clothing",
        "Apparel and fashion items",
        SeedProduct { name: "T-Shirt", cents: 1999, quantity: 100, low_stock_threshold: 20 },
    ),
    (
        "Food",
        "Grocery and food items",
        SeedProduct { name: "Coffee", cents: 899, quantity: 50, low_stock_threshold: 10 },
    ),
];

/// Creates one category per starter product, then the product in it.
pub async fn seed_catalog(catalog: &Catalog) -> Result<(), CatalogError> {
    for (category, description, product) in SEED {
        let category_id = catalog
            .create_category(CategoryCreate::new(category).described(description))
            .await?;
        catalog
            .create_product(
                ProductCreate::new(product.name, Decimal::new(product.cents, 2), product.quantity)
                    .in_category(category_id)
                    .with_threshold(product.low_stock_threshold),
            )
            .await?;
    }
    info!(categories = SEED.len(), products = SEED.len(), "Catalog seeded");
    Ok(())
}
