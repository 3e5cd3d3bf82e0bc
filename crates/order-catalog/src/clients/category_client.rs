//! # Category Client
//!
//! Wraps a `ResourceClient<Category>`.
use crate::error::CatalogError;
use crate::model::{Category, CategoryCode, CategoryCreate};
use async_trait::async_trait;
use store_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Category actor.
#[derive(Clone)]
pub struct CategoryClient {
    inner: ResourceClient<Category>,
}

impl CategoryClient {
    pub fn new(inner: ResourceClient<Category>) -> Self {
        Self { inner }
    }

    /// Stores a new category and returns its code.
    #[instrument(skip(self))]
    pub async fn create_category(
        &self,
        params: CategoryCreate,
    ) -> Result<CategoryCode, CatalogError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(CatalogError::from)
    }
}

#[async_trait]
impl ActorClient<Category> for CategoryClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Category> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CatalogError::from(e)
    }

    fn not_found(id: &CategoryCode) -> Self::Error {
        CatalogError::NotFound {
            entity: "category",
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PersistenceError;
    use store_actor::mock::{create_mock_client, expect_create, MockClient};

    #[tokio::test]
    async fn test_create_category_forwards_payload() {
        let (client, mut receiver) = create_mock_client::<Category>(10);
        let categories = CategoryClient::new(client);

        let task = tokio::spawn(async move {
            categories
                .create_category(CategoryCreate {
                    code: "CAT1".to_string(),
                    label: "Ordinateurs".to_string(),
                })
                .await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.code, "CAT1");
        assert_eq!(params.label, "Ordinateurs");
        responder.send(Ok(CategoryCode::from("CAT1"))).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), CategoryCode::from("CAT1"));
    }

    #[tokio::test]
    async fn test_duplicate_code_becomes_persistence_error() {
        let mut mock = MockClient::<Category>::new();
        mock.expect_create().return_err(FrameworkError::DuplicateKey {
            table: "category",
            id: "CAT1".to_string(),
        });
        let categories = CategoryClient::new(mock.client());

        let err = categories
            .create_category(CategoryCreate {
                code: "CAT1".to_string(),
                label: "Again".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CatalogError::Persistence(PersistenceError::DuplicateKey { entity: "category", .. })
        ));
        mock.verify();
    }

    #[tokio::test]
    async fn test_count_goes_through_actor_client() {
        let mut mock = MockClient::<Category>::new();
        mock.expect_count().return_ok(3);
        let categories = CategoryClient::new(mock.client());

        assert_eq!(categories.count().await.unwrap(), 3);
        mock.verify();
    }

    #[tokio::test]
    async fn test_require_missing_category_is_not_found() {
        let mut mock = MockClient::<Category>::new();
        mock.expect_get(CategoryCode::from("CAT9")).return_ok(None);
        let categories = CategoryClient::new(mock.client());

        let err = categories.require(CategoryCode::from("CAT9")).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { entity: "category", ref id } if id == "CAT9"));
        mock.verify();
    }
}
