//! # ActorClient Trait
//!
//! Common interface for table-specific clients: default `get`, `require`, `list` and `count`
//! built on top of a generic `ResourceClient`, with errors mapped into the caller's own type.
use crate::{FrameworkError, ResourceClient, StoreEntity};
use async_trait::async_trait;

/// Trait for table-specific clients to inherit the standard read operations.
///
/// # Example
///
/// ```rust
/// use store_actor::{ActorClient, FrameworkError, ResourceClient, StoreEntity};
///
/// #[derive(Clone, Debug)] struct Tag { name: String }
/// #[derive(Debug, thiserror::Error)]
/// enum TagError {
///     #[error("tag {0} not found")] Missing(String),
///     #[error("{0}")] Framework(String),
/// }
///
/// impl StoreEntity for Tag {
///     type Id = String;
///     type Create = String;
///     type Context = ();
///     type Error = TagError;
///     const TABLE: &'static str = "tag";
///     fn assign_id(name: &String, _: u32) -> String { name.clone() }
///     fn from_create_params(id: String, _: String) -> Result<Self, TagError> {
///         Ok(Self { name: id })
///     }
/// }
///
/// struct TagClient { inner: ResourceClient<Tag> }
///
/// impl ActorClient<Tag> for TagClient {
///     type Error = TagError;
///     fn inner(&self) -> &ResourceClient<Tag> { &self.inner }
///     fn map_error(e: FrameworkError) -> TagError { TagError::Framework(e.to_string()) }
///     fn not_found(id: &String) -> TagError { TagError::Missing(id.clone()) }
/// }
///
/// async fn usage(client: TagClient) {
///     // get(), require(), list() and count() come for free.
///     let _ = client.require("rust".to_string()).await;
///     let _ = client.list().await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: StoreEntity>: Send + Sync {
    /// The table-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the table-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Error returned by [`ActorClient::require`] when the key is absent.
    fn not_found(id: &T::Id) -> Self::Error;

    /// Fetch a record by key.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch a record that must exist.
    #[tracing::instrument(skip(self))]
    async fn require(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        match self.inner().get(id.clone()).await.map_err(Self::map_error)? {
            Some(item) => Ok(item),
            None => Err(Self::not_found(&id)),
        }
    }

    /// Fetch every record in key order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    #[tracing::instrument(skip(self))]
    async fn count(&self) -> Result<usize, Self::Error> {
        self.inner().count().await.map_err(Self::map_error)
    }
}
