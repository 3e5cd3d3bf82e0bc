//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
//! It wraps a `ResourceClient<Order>`.
use crate::error::CatalogError;
use crate::model::{Order, OrderCreate, OrderId};
use async_trait::async_trait;
use chrono::NaiveDate;
use store_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Stores a new order and returns the id the table generated for it.
    #[instrument(skip(self))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderId, CatalogError> {
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(CatalogError::from)?;
        info!(order_id = %id, "Order placed");
        Ok(id)
    }

    /// Orders dated within `[start, end]`, both bounds included. Empty when `start > end`.
    #[instrument(skip(self))]
    pub async fn orders_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Order>, CatalogError> {
        if start > end {
            return Ok(Vec::new());
        }
        self.inner
            .query(move |o: &Order| (start..=end).contains(&o.date()))
            .await
            .map_err(CatalogError::from)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CatalogError::from(e)
    }

    fn not_found(id: &OrderId) -> Self::Error {
        CatalogError::NotFound {
            entity: "order",
            id: id.to_string(),
        }
    }
}
