//! # Catalog
//!
//! Administrative product operations that need both the Product and the Category actor:
//! creating products against a known category, the filtered product list with category names,
//! low-stock reporting and stock corrections.

use crate::category_actor::CategoryError;
use crate::clients::{CategoryClient, ProductClient};
use crate::model::{
    Category, CategoryCreate, CategoryId, Product, ProductCreate, ProductId, ProductUpdate,
};
use crate::product_actor::ProductError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{info, instrument, warn};

/// Shown for products without a category, or whose category no longer exists.
pub const NO_CATEGORY: &str = "No Category";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Unknown category: {0}")]
    UnknownCategory(CategoryId),
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error(transparent)]
    Category(#[from] CategoryError),
}

/// Product list filter. Every criterion that is set must match.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductFilter {
    /// Case-sensitive substring of the product name.
    pub name: Option<String>,
    pub category_id: Option<CategoryId>,
    /// Inclusive.
    pub min_price: Option<Decimal>,
    /// Inclusive.
    pub max_price: Option<Decimal>,
    #[serde(default)]
    pub low_stock_only: bool,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            if !product.name.contains(name) {
                return false;
            }
        }
        if self.category_id.is_some() && product.category_id != self.category_id {
            return false;
        }
        if self.min_price.is_some_and(|min| product.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| product.price > max) {
            return false;
        }
        !self.low_stock_only || product.is_low_stock()
    }
}

/// A product with its category's display name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductListing {
    #[serde(flatten)]
    pub product: Product,
    pub category_name: String,
}

#[derive(Clone)]
pub struct Catalog {
    products: ProductClient,
    categories: CategoryClient,
}

impl Catalog {
    pub fn new(products: ProductClient, categories: CategoryClient) -> Self {
        Self {
            products,
            categories,
        }
    }

    async fn ensure_category(&self, id: Option<CategoryId>) -> Result<(), CatalogError> {
        let Some(id) = id else {
            return Ok(());
        };
        if self.categories.exists(id).await? {
            return Ok(());
        }
        warn!(category_id = %id, "Unknown category");
        Err(CatalogError::UnknownCategory(id))
    }

    #[instrument(skip(self))]
    pub async fn create_category(&self, params: CategoryCreate) -> Result<CategoryId, CatalogError> {
        let id = self.categories.create_category(params).await?;
        info!(category_id = %id, "Category added to catalog");
        Ok(id)
    }

    /// Refused with `CategoryInUse` while products still reference it.
    pub async fn delete_category(&self, id: CategoryId) -> Result<(), CatalogError> {
        Ok(self.categories.delete_category(id).await?)
    }

    pub async fn categories(&self) -> Result<Vec<Category>, CatalogError> {
        Ok(self.categories.list_categories().await?)
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, CatalogError> {
        self.ensure_category(params.category_id).await?;
        let id = self.products.create_product(params).await?;
        info!(product_id = %id, "Product added to catalog");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, CatalogError> {
        self.ensure_category(update.category_id).await?;
        Ok(self.products.update_product(id, update).await?)
    }

    /// Removes a product. Orders that contain it keep their lines and price snapshots.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<(), CatalogError> {
        self.products.delete_product(id).await?;
        info!(product_id = %id, "Product removed from catalog");
        Ok(())
    }

    /// Filtered products with category names, in id order.
    #[instrument(skip(self))]
    pub async fn search(&self, filter: &ProductFilter) -> Result<Vec<ProductListing>, CatalogError> {
        let names: HashMap<CategoryId, String> = self
            .categories
            .list_categories()
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        Ok(self
            .products
            .search(filter)
            .await?
            .into_iter()
            .map(|product| {
                let category_name = product
                    .category_id
                    .and_then(|id| names.get(&id).cloned())
                    .unwrap_or_else(|| NO_CATEGORY.to_string());
                ProductListing {
                    product,
                    category_name,
                }
            })
            .collect())
    }

    /// Products at or below their low-stock threshold.
    pub async fn low_stock(&self) -> Result<Vec<Product>, CatalogError> {
        let filter = ProductFilter {
            low_stock_only: true,
            ..Default::default()
        };
        Ok(self.products.search(&filter).await?)
    }

    /// Products that can be put on an order form (quantity above zero).
    pub async fn available_for_order(&self) -> Result<Vec<Product>, CatalogError> {
        let mut products = self.products.list_products().await?;
        products.retain(|p| p.quantity > 0);
        Ok(products)
    }

    /// Stock count correction. Returns the new quantity.
    #[instrument(skip(self))]
    pub async fn adjust_stock(&self, id: ProductId, quantity: u32) -> Result<u32, CatalogError> {
        let level = self.products.set_stock(id, quantity).await?;
        info!(product_id = %id, level, "Stock adjusted");
        Ok(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, category: Option<u32>, cents: i64, quantity: u32) -> Product {
        Product {
            id: ProductId(1),
            name: name.to_string(),
            category_id: category.map(CategoryId),
            price: Decimal::new(cents, 2),
            quantity,
            low_stock_threshold: 10,
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(ProductFilter::default().matches(&product("Laptop", None, 99999, 0)));
    }

    #[test]
    fn test_name_filter_is_case_sensitive_substring() {
        let filter = ProductFilter {
            name: Some("Shirt".into()),
            ..Default::default()
        };
        assert!(filter.matches(&product("T-Shirt", Some(2), 1999, 100)));
        assert!(!filter.matches(&product("t-shirt", Some(2), 1999, 100)));
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let filter = ProductFilter {
            min_price: Some(Decimal::new(899, 2)),
            max_price: Some(Decimal::new(1999, 2)),
            ..Default::default()
        };
        assert!(filter.matches(&product("Coffee", None, 899, 50)));
        assert!(filter.matches(&product("T-Shirt", None, 1999, 50)));
        assert!(!filter.matches(&product("Laptop", None, 99999, 50)));
    }

    #[test]
    fn test_category_and_low_stock() {
        let filter = ProductFilter {
            category_id: Some(CategoryId(1)),
            low_stock_only: true,
            ..Default::default()
        };
        assert!(filter.matches(&product("Laptop", Some(1), 99999, 10)));
        assert!(!filter.matches(&product("Laptop", Some(1), 99999, 11)));
        assert!(!filter.matches(&product("Laptop", None, 99999, 1)));
    }

    #[test]
    fn test_filter_deserializes_from_query_shape() {
        let filter: ProductFilter =
            serde_json::from_str(r#"{"name":"Lap","min_price":"10.00"}"#).unwrap();
        assert_eq!(filter.name.as_deref(), Some("Lap"));
        assert_eq!(filter.min_price, Some(Decimal::new(1000, 2)));
        assert!(!filter.low_stock_only);
    }
}
