//! [`StoreEntity`] implementation for [`Product`].
//!
//! The price and reference are checked by [`Product::new`]; the category is checked against
//! the category table in `on_create`.

use crate::clients::CategoryClient;
use crate::error::{CatalogError, PersistenceError};
use crate::model::{Product, ProductCreate, ProductRef};
use async_trait::async_trait;
use store_actor::{ActorClient, StoreEntity};

#[async_trait]
impl StoreEntity for Product {
    type Id = ProductRef;
    type Create = ProductCreate;
    type Context = CategoryClient;
    type Error = CatalogError;
    const TABLE: &'static str = "product";

    fn assign_id(params: &ProductCreate, _next: u32) -> ProductRef {
        ProductRef(params.reference.clone())
    }

    fn from_create_params(id: ProductRef, params: ProductCreate) -> Result<Self, CatalogError> {
        Ok(Product::new(id.0, params.price, params.category)?)
    }

    async fn on_create(&mut self, categories: &CategoryClient) -> Result<(), CatalogError> {
        match categories.get(self.category().clone()).await? {
            Some(_) => Ok(()),
            None => Err(PersistenceError::DanglingReference {
                entity: Self::TABLE,
                reference: format!("category {}", self.category()),
            }
            .into()),
        }
    }
}
