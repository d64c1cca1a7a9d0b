//! # Product Client
//!
//! Provides a high‑level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes domain‑specific methods.
use crate::catalog::ProductFilter;
use crate::model::{OrderLine, Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::from(e)
    }
}

fn unexpected(result: ProductActionResult) -> ProductError {
    ProductError::ActorCommunicationError(format!("unexpected action result {result:?}"))
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        Ok(self.inner.create(params).await?)
    }

    /// Applies a partial update and returns the stored product.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        Ok(self.inner.update(id, update).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ProductError> {
        self.delete(id).await
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        self.list().await
    }

    /// Products matching `filter`, in id order.
    #[instrument(skip(self))]
    pub async fn search(&self, filter: &ProductFilter) -> Result<Vec<Product>, ProductError> {
        let mut products = self.list().await?;
        products.retain(|p| filter.matches(p));
        Ok(products)
    }

    /// Check the current stock level for a product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        debug!("Checking stock");
        match self.inner.perform_action(id, ProductAction::CheckStock).await? {
            ProductActionResult::CheckStock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    /// Reserve stock for one product. Returns the unit price at reservation time.
    #[instrument(skip(self))]
    pub async fn reserve_stock(&self, id: ProductId, quantity: u32) -> Result<Decimal, ProductError> {
        debug!("Reserving stock");
        match self
            .inner
            .perform_action(id, ProductAction::Reserve(quantity))
            .await?
        {
            ProductActionResult::Reserve(price) => Ok(price),
            other => Err(unexpected(other)),
        }
    }

    /// Reserve every line or none of them.
    ///
    /// Returns the unit price of each line, in line order. On error no stock has been taken.
    #[instrument(skip(self, lines), fields(lines = lines.len()))]
    pub async fn reserve_lines(&self, lines: &[OrderLine]) -> Result<Vec<Decimal>, ProductError> {
        if lines.is_empty() {
            return Ok(Vec::new());
        }
        let ops = lines
            .iter()
            .map(|line| (line.product_id, ProductAction::Reserve(line.quantity)))
            .collect();
        debug!("Sending transaction");

        self.inner
            .transaction(ops)
            .await?
            .into_iter()
            .map(|result| match result {
                ProductActionResult::Reserve(price) => Ok(price),
                other => Err(unexpected(other)),
            })
            .collect()
    }

    /// Return units to stock. Returns the new quantity.
    #[instrument(skip(self))]
    pub async fn release_stock(&self, id: ProductId, quantity: u32) -> Result<u32, ProductError> {
        match self
            .inner
            .perform_action(id, ProductAction::Release(quantity))
            .await?
        {
            ProductActionResult::Release(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    /// Overwrite the stock count.
    #[instrument(skip(self))]
    pub async fn set_stock(&self, id: ProductId, quantity: u32) -> Result<u32, ProductError> {
        match self
            .inner
            .perform_action(id, ProductAction::SetStock(quantity))
            .await?
        {
            ProductActionResult::SetStock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_transaction, MockClient};

    #[tokio::test]
    async fn test_check_stock_returns_correct_level() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_action(ProductId(1))
            .return_ok(ProductActionResult::CheckStock(42));

        let client = ProductClient::new(mock.client());
        assert_eq!(client.check_stock(ProductId(1)).await.unwrap(), 42);
        mock.verify();
    }

    #[tokio::test]
    async fn test_reserve_lines_sends_one_transaction() {
        let (inner, mut receiver) = create_mock_client::<Product>(10);
        let client = ProductClient::new(inner);

        let reserve_task = tokio::spawn(async move {
            client
                .reserve_lines(&[
                    OrderLine::new(ProductId(1), 3),
                    OrderLine::new(ProductId(2), 1),
                ])
                .await
        });

        let (ops, responder) = expect_transaction(&mut receiver)
            .await
            .expect("Expected Transaction request");
        assert_eq!(
            ops,
            vec![
                (ProductId(1), ProductAction::Reserve(3)),
                (ProductId(2), ProductAction::Reserve(1)),
            ]
        );
        responder
            .send(Ok(vec![
                ProductActionResult::Reserve(Decimal::new(999, 2)),
                ProductActionResult::Reserve(Decimal::new(1999, 2)),
            ]))
            .unwrap();

        let prices = reserve_task.await.unwrap().unwrap();
        assert_eq!(prices, vec![Decimal::new(999, 2), Decimal::new(1999, 2)]);
    }

    #[tokio::test]
    async fn test_reserve_lines_without_lines_skips_actor() {
        let mock = MockClient::<Product>::new();
        let client = ProductClient::new(mock.client());

        assert!(client.reserve_lines(&[]).await.unwrap().is_empty());
        mock.verify();
    }

    #[tokio::test]
    async fn test_reserve_stock_insufficient_stock() {
        let mut mock = MockClient::<Product>::new();
        let short = ProductError::InsufficientStock {
            product_id: ProductId(1),
            requested: 100,
            available: 7,
        };
        mock.expect_action(ProductId(1))
            .return_err(FrameworkError::EntityError(Box::new(short.clone())));

        let client = ProductClient::new(mock.client());
        let err = client.reserve_stock(ProductId(1), 100).await.unwrap_err();
        assert_eq!(err, short);
    }

    #[tokio::test]
    async fn test_mismatched_result_is_an_error() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_action(ProductId(1))
            .return_ok(ProductActionResult::Release(3));

        let client = ProductClient::new(mock.client());
        let err = client.check_stock(ProductId(1)).await.unwrap_err();
        assert!(matches!(err, ProductError::ActorCommunicationError(_)));
    }
}
