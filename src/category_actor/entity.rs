//! [`ActorEntity`] implementation for [`Category`].

use super::error::CategoryError;
use crate::clients::ProductClient;
use crate::model::{Category, CategoryCreate, CategoryId, CategoryUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::debug;
use validator::Validate;

/// Categories have no custom operations.
#[derive(Debug, Clone)]
pub enum CategoryAction {}

#[async_trait]
impl ActorEntity for Category {
    type Id = CategoryId;
    type Create = CategoryCreate;
    type Update = CategoryUpdate;
    type Action = CategoryAction;
    type ActionResult = ();
    /// Used by `on_delete` to look for products that still reference the category.
    type Context = ProductClient;
    type Error = CategoryError;

    fn from_create_params(id: CategoryId, params: CategoryCreate) -> Result<Self, Self::Error> {
        params
            .validate()
            .map_err(|e| CategoryError::ValidationError(e.to_string()))?;
        Ok(Self {
            id,
            name: params.name,
            description: params.description,
        })
    }

    async fn on_update(
        &mut self,
        update: CategoryUpdate,
        _ctx: &ProductClient,
    ) -> Result<(), Self::Error> {
        update
            .validate()
            .map_err(|e| CategoryError::ValidationError(e.to_string()))?;
        if let Some(name) = update.name {
            self.name = name;
        }
        if update.clear_description {
            self.description = None;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        Ok(())
    }

    async fn on_delete(&self, products: &ProductClient) -> Result<(), Self::Error> {
        let in_use = products
            .list_products()
            .await?
            .iter()
            .filter(|p| p.category_id == Some(self.id))
            .count();
        debug!(category_id = %self.id, in_use, "Checked category references");
        if in_use > 0 {
            return Err(CategoryError::CategoryInUse {
                category_id: self.id,
                products: in_use,
            });
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CategoryAction,
        _ctx: &ProductClient,
    ) -> Result<(), Self::Error> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;
    use actor_framework::mock::create_mock_client;

    fn food() -> Category {
        Category::from_create_params(
            CategoryId(3),
            CategoryCreate::new("Food").described("Grocery and food items"),
        )
        .unwrap()
    }

    fn products() -> ProductClient {
        let (client, _receiver) = create_mock_client::<Product>(1);
        ProductClient::new(client)
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let err = Category::from_create_params(CategoryId(1), CategoryCreate::new("   "));
        assert!(matches!(err, Err(CategoryError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_update_can_clear_description() {
        let mut category = food();
        category
            .on_update(
                CategoryUpdate {
                    clear_description: true,
                    ..Default::default()
                },
                &products(),
            )
            .await
            .unwrap();
        assert_eq!(category.description, None);
        assert_eq!(category.name, "Food");

        let rejected = category
            .on_update(
                CategoryUpdate {
                    name: Some(" ".into()),
                    ..Default::default()
                },
                &products(),
            )
            .await;
        assert!(matches!(rejected, Err(CategoryError::ValidationError(_))));
    }
}
