//! # Order Line Client
//!
//! Wraps a `ResourceClient<OrderLine>`. Lines come back ordered by `(order, product)`.
use crate::error::CatalogError;
use crate::model::{OrderId, OrderLine, OrderLineCreate, OrderLineId};
use async_trait::async_trait;
use std::collections::BTreeSet;
use store_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the OrderLine actor.
#[derive(Clone)]
pub struct OrderLineClient {
    inner: ResourceClient<OrderLine>,
}

impl OrderLineClient {
    pub fn new(inner: ResourceClient<OrderLine>) -> Self {
        Self { inner }
    }

    /// Stores a new line. Its order and product must already exist, and the order may not
    /// already hold a line for that product.
    #[instrument(skip(self))]
    pub async fn create_line(&self, params: OrderLineCreate) -> Result<OrderLineId, CatalogError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(CatalogError::from)
    }

    #[instrument(skip(self))]
    pub async fn lines_for_order(&self, order: OrderId) -> Result<Vec<OrderLine>, CatalogError> {
        self.inner
            .query(move |l: &OrderLine| l.order() == order)
            .await
            .map_err(CatalogError::from)
    }

    /// Lines belonging to any of `orders`.
    #[instrument(skip(self))]
    pub async fn lines_for_orders(
        &self,
        orders: BTreeSet<OrderId>,
    ) -> Result<Vec<OrderLine>, CatalogError> {
        if orders.is_empty() {
            return Ok(Vec::new());
        }
        self.inner
            .query(move |l: &OrderLine| orders.contains(&l.order()))
            .await
            .map_err(CatalogError::from)
    }
}

#[async_trait]
impl ActorClient<OrderLine> for OrderLineClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<OrderLine> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CatalogError::from(e)
    }

    fn not_found(id: &OrderLineId) -> Self::Error {
        CatalogError::NotFound {
            entity: "order_line",
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store_actor::mock::MockClient;

    fn line(order: u32, product: &str, quantity: u32) -> OrderLine {
        OrderLine::new(OrderId(order), product.into(), quantity).unwrap()
    }

    #[tokio::test]
    async fn test_lines_for_order_filters_by_order() {
        let mut mock = MockClient::<OrderLine>::new();
        mock.expect_query().return_ok(vec![
            line(1, "EE85", 5),
            line(1, "ES12", 7),
            line(2, "AB45", 3),
        ]);
        let client = OrderLineClient::new(mock.client());

        let lines = client.lines_for_order(OrderId(1)).await.unwrap();
        let quantities: Vec<u32> = lines.iter().map(OrderLine::quantity).collect();
        assert_eq!(quantities, vec![5, 7]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_lines_for_orders_with_no_orders_is_empty() {
        let mock = MockClient::<OrderLine>::new();
        let client = OrderLineClient::new(mock.client());

        assert!(client.lines_for_orders(BTreeSet::new()).await.unwrap().is_empty());
        mock.verify();
    }
}
