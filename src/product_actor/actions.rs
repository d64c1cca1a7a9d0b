//! Custom actions for the Product actor.
//!
//! These are handled by
//! [`ActorEntity::handle_action`](actor_framework::ActorEntity::handle_action) on
//! [`Product`](crate::model::Product), either one at a time or as part of a transaction.

use rust_decimal::Decimal;

/// Stock operations on a single product.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    /// Reads the current quantity.
    CheckStock,
    /// Takes units out of stock.
    ///
    /// # Errors
    /// `InvalidQuantity` for zero, `InsufficientStock` when more is asked than is available.
    /// Neither changes the product.
    Reserve(u32),
    /// Puts units back into stock.
    Release(u32),
    /// Overwrites the quantity (stock count correction).
    SetStock(u32),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    /// Current quantity.
    CheckStock(u32),
    /// The unit price at the moment of the reservation.
    Reserve(Decimal),
    /// Quantity after the release.
    Release(u32),
    /// Quantity after the overwrite.
    SetStock(u32),
}
