//! [`ActorEntity`] implementation for [`Product`].

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use rust_decimal::Decimal;
use validator::Validate;

fn ensure_price(price: Decimal) -> Result<Decimal, ProductError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ProductError::ValidationError(format!(
            "price must not be negative, got {price}"
        )));
    }
    Ok(price)
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        params
            .validate()
            .map_err(|e| ProductError::ValidationError(e.to_string()))?;
        Ok(Self {
            id,
            name: params.name,
            category_id: params.category_id,
            price: ensure_price(params.price)?,
            quantity: params.quantity,
            low_stock_threshold: params.low_stock_threshold,
        })
    }

    /// Applies every field that is `Some`. The actor discards the copy on error, so a failed
    /// price check after a name change leaves the stored product untouched.
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), Self::Error> {
        update
            .validate()
            .map_err(|e| ProductError::ValidationError(e.to_string()))?;
        if let Some(name) = update.name {
            self.name = name;
        }
        if update.clear_category {
            self.category_id = None;
        }
        if let Some(category_id) = update.category_id {
            self.category_id = Some(category_id);
        }
        if let Some(price) = update.price {
            self.price = ensure_price(price)?;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(threshold) = update.low_stock_threshold {
            self.low_stock_threshold = threshold;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, Self::Error> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.quantity)),
            ProductAction::Reserve(0) => Err(ProductError::InvalidQuantity(0)),
            ProductAction::Reserve(requested) if requested > self.quantity => {
                Err(ProductError::InsufficientStock {
                    product_id: self.id,
                    requested,
                    available: self.quantity,
                })
            }
            ProductAction::Reserve(requested) => {
                self.quantity -= requested;
                Ok(ProductActionResult::Reserve(self.price))
            }
            ProductAction::Release(units) => {
                self.quantity = self
                    .quantity
                    .checked_add(units)
                    .ok_or(ProductError::InvalidQuantity(units))?;
                Ok(ProductActionResult::Release(self.quantity))
            }
            ProductAction::SetStock(quantity) => {
                self.quantity = quantity;
                Ok(ProductActionResult::SetStock(quantity))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CategoryId;

    fn laptop() -> Product {
        Product::from_create_params(
            ProductId(1),
            ProductCreate::new("Laptop", Decimal::new(99999, 2), 15).with_threshold(5),
        )
        .unwrap()
    }

    #[test]
    fn test_create_validates_fields() {
        let product = laptop();
        assert_eq!(product.low_stock_threshold, 5);
        assert!(!product.is_low_stock());

        let nameless = ProductCreate::new("", Decimal::ONE, 1);
        assert!(matches!(
            Product::from_create_params(ProductId(2), nameless),
            Err(ProductError::ValidationError(_))
        ));

        let negative = ProductCreate::new("Refund", Decimal::new(-1, 2), 1);
        assert!(matches!(
            Product::from_create_params(ProductId(3), negative),
            Err(ProductError::ValidationError(_))
        ));

        let zero_threshold = ProductCreate::new("Cable", Decimal::ONE, 1).with_threshold(0);
        assert!(Product::from_create_params(ProductId(4), zero_threshold).is_err());

        let free = ProductCreate::new("Sticker", Decimal::ZERO, 1);
        assert!(Product::from_create_params(ProductId(5), free).is_ok());
    }

    #[tokio::test]
    async fn test_reserve_returns_price_snapshot() {
        let mut product = laptop();
        let result = product
            .handle_action(ProductAction::Reserve(3), &())
            .await
            .unwrap();
        assert_eq!(result, ProductActionResult::Reserve(Decimal::new(99999, 2)));
        assert_eq!(product.quantity, 12);
    }

    #[tokio::test]
    async fn test_reserve_rejects_shortage_and_zero() {
        let mut product = laptop();

        let err = product
            .handle_action(ProductAction::Reserve(16), &())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ProductError::InsufficientStock {
                product_id: ProductId(1),
                requested: 16,
                available: 15
            }
        );

        let err = product
            .handle_action(ProductAction::Reserve(0), &())
            .await
            .unwrap_err();
        assert_eq!(err, ProductError::InvalidQuantity(0));
        assert_eq!(product.quantity, 15);
    }

    #[tokio::test]
    async fn test_release_and_set_stock() {
        let mut product = laptop();
        product
            .handle_action(ProductAction::SetStock(4), &())
            .await
            .unwrap();
        assert!(product.is_low_stock());

        let result = product
            .handle_action(ProductAction::Release(2), &())
            .await
            .unwrap();
        assert_eq!(result, ProductActionResult::Release(6));

        let overflow = product
            .handle_action(ProductAction::Release(u32::MAX), &())
            .await;
        assert_eq!(overflow, Err(ProductError::InvalidQuantity(u32::MAX)));
    }

    #[tokio::test]
    async fn test_update_applies_some_fields() {
        let mut product = laptop();
        product
            .on_update(
                ProductUpdate {
                    category_id: Some(CategoryId(2)),
                    price: Some(Decimal::new(89999, 2)),
                    ..Default::default()
                },
                &(),
            )
            .await
            .unwrap();
        assert_eq!(product.category_id, Some(CategoryId(2)));
        assert_eq!(product.price, Decimal::new(89999, 2));
        assert_eq!(product.name, "Laptop");

        let rejected = product
            .on_update(
                ProductUpdate {
                    low_stock_threshold: Some(0),
                    ..Default::default()
                },
                &(),
            )
            .await;
        assert!(matches!(rejected, Err(ProductError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_update_can_detach_category() {
        let mut product = laptop();
        product.category_id = Some(CategoryId(1));
        product
            .on_update(
                ProductUpdate {
                    clear_category: true,
                    ..Default::default()
                },
                &(),
            )
            .await
            .unwrap();
        assert_eq!(product.category_id, None);
    }
}
