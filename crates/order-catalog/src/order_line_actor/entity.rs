//! [`StoreEntity`] implementation for [`OrderLine`].

use crate::clients::{OrderClient, ProductClient};
use crate::error::{CatalogError, PersistenceError};
use crate::model::{OrderLine, OrderLineCreate, OrderLineId};
use async_trait::async_trait;
use store_actor::{ActorClient, StoreEntity};
use tracing::debug;

#[async_trait]
impl StoreEntity for OrderLine {
    type Id = OrderLineId;
    type Create = OrderLineCreate;
    type Context = (OrderClient, ProductClient);
    type Error = CatalogError;
    const TABLE: &'static str = "order_line";

    fn assign_id(params: &OrderLineCreate, _next: u32) -> OrderLineId {
        OrderLineId {
            order: params.order,
            product: params.product.clone(),
        }
    }

    fn from_create_params(id: OrderLineId, params: OrderLineCreate) -> Result<Self, CatalogError> {
        Ok(OrderLine::new(id.order, id.product, params.quantity)?)
    }

    async fn on_create(
        &mut self,
        ctx: &(OrderClient, ProductClient),
    ) -> Result<(), CatalogError> {
        let (orders, products) = ctx;
        debug!(order = %self.order(), product = %self.product(), "Checking references");

        if orders.get(self.order()).await?.is_none() {
            return Err(PersistenceError::DanglingReference {
                entity: Self::TABLE,
                reference: format!("order {}", self.order()),
            }
            .into());
        }

        if products.get(self.product().clone()).await?.is_none() {
            return Err(PersistenceError::DanglingReference {
                entity: Self::TABLE,
                reference: format!("product {}", self.product()),
            }
            .into());
        }

        Ok(())
    }
}
