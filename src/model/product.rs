use crate::model::CategoryId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use super::not_blank;
use validator::Validate;

/// Threshold used when a product is created without one.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 10;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// Represents a product in the inventory.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
/// - Creation parameters ([`ProductCreate`])
/// - Update parameters ([`ProductUpdate`])
/// - Custom actions ([`ProductAction`](crate::product_actor::ProductAction))
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category_id: Option<CategoryId>,
    pub price: Decimal,
    pub quantity: u32,
    pub low_stock_threshold: u32,
}

impl Product {
    /// A product is low on stock once its quantity has fallen to the threshold.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.low_stock_threshold
    }
}

/// Payload for creating a product.
#[derive(Debug, Clone, Validate, Deserialize)]
pub struct ProductCreate {
    #[validate(length(min = 1, max = 100), custom(function = "not_blank"))]
    pub name: String,
    pub category_id: Option<CategoryId>,
    pub price: Decimal,
    pub quantity: u32,
    #[validate(range(min = 1))]
    #[serde(default = "default_threshold")]
    pub low_stock_threshold: u32,
}

fn default_threshold() -> u32 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

impl ProductCreate {
    /// An uncategorised product with the default low-stock threshold.
    pub fn new(name: impl Into<String>, price: Decimal, quantity: u32) -> Self {
        Self {
            name: name.into(),
            category_id: None,
            price,
            quantity,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }

    pub fn in_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_threshold(mut self, low_stock_threshold: u32) -> Self {
        self.low_stock_threshold = low_stock_threshold;
        self
    }
}

/// Partial update; `None` leaves the field as it is.
#[derive(Debug, Clone, Default, Validate, Deserialize)]
pub struct ProductUpdate {
    #[validate(length(min = 1, max = 100), custom(function = "not_blank"))]
    pub name: Option<String>,
    pub category_id: Option<CategoryId>,
    /// Detach the product from its category. Applied before `category_id`.
    #[serde(default)]
    pub clear_category: bool,
    pub price: Option<Decimal>,
    pub quantity: Option<u32>,
    #[validate(range(min = 1))]
    pub low_stock_threshold: Option<u32>,
}
