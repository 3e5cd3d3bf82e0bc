//! # Product Client
//!
//! Provides a high‑level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes the product finders. Every finder returns
//! products in reference order and an empty list when nothing matches.
use crate::error::CatalogError;
use crate::model::{CategoryCode, Product, ProductCreate, ProductRef};
use async_trait::async_trait;
use std::collections::BTreeSet;
use store_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    /// Stores a new product. Its category must already exist.
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductRef, CatalogError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(CatalogError::from)
    }

    /// Products belonging to `category`.
    #[instrument(skip(self))]
    pub async fn find_by_category(
        &self,
        category: &CategoryCode,
    ) -> Result<Vec<Product>, CatalogError> {
        let category = category.clone();
        self.inner
            .query(move |p: &Product| *p.category() == category)
            .await
            .map_err(CatalogError::from)
    }

    /// Products strictly more expensive than `threshold`.
    #[instrument(skip(self))]
    pub async fn find_by_price_above(&self, threshold: f64) -> Result<Vec<Product>, CatalogError> {
        self.inner
            .query(move |p: &Product| p.price() > threshold)
            .await
            .map_err(CatalogError::from)
    }

    /// Products whose reference is in `references`. Unknown references are skipped.
    #[instrument(skip(self))]
    pub async fn find_by_references(
        &self,
        references: BTreeSet<ProductRef>,
    ) -> Result<Vec<Product>, CatalogError> {
        if references.is_empty() {
            return Ok(Vec::new());
        }
        self.inner
            .query(move |p: &Product| references.contains(p.reference()))
            .await
            .map_err(CatalogError::from)
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CatalogError::from(e)
    }

    fn not_found(id: &ProductRef) -> Self::Error {
        CatalogError::NotFound {
            entity: "product",
            id: id.to_string(),
        }
    }
}
