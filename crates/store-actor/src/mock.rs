//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a queue
//! of expectations instead of a running table. It lets unit tests drive client and service code
//! deterministically, without spawning any `ResourceActor`.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None (canned answers) | Real table |
//! | **Use Case** | Logic *around* a client (joins, error mapping) | The table itself or the full system |
//! | **Error Injection** | Easy (`return_err`) | Requires a specific state |
//!
//! ## Testing Strategies
//!
//! - **Pattern 0, pure mock**: wrap `mock.client()` in a typed client and assert on its results.
//! - **Pattern 1, single actor**: `ResourceActor::new(..)` plus `tokio::spawn(actor.run(()))`.
//! - **Pattern 2, actor with mocked dependencies**: run a real actor whose `Context` holds
//!   clients built from mocks.
//! - **Pattern 3, full system**: start every table and test through the public services.
//!
//! ```rust
//! use store_actor::mock::MockClient;
//! use store_actor::StoreEntity;
//!
//! #[derive(Clone, Debug, PartialEq)] struct Tag { name: String }
//! #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
//!
//! impl StoreEntity for Tag {
//!     type Id = String; type Create = String; type Context = (); type Error = TagError;
//!     const TABLE: &'static str = "tag";
//!     fn assign_id(name: &String, _: u32) -> String { name.clone() }
//!     fn from_create_params(id: String, _: String) -> Result<Self, TagError> {
//!         Ok(Self { name: id })
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Tag>::new();
//!     mock.expect_query().return_ok(vec![Tag { name: "rust".into() }]);
//!
//!     let tags = mock.client().list().await.unwrap();
//!     assert_eq!(tags.len(), 1);
//!     mock.verify();
//! }
//! ```

use crate::client::ResourceClient;
use crate::entity::StoreEntity;
use crate::error::FrameworkError;
use crate::message::{Filter, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the canned answer for it.
enum Expectation<T: StoreEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    /// Rows are passed through the request's filter before being returned, so a mock answers
    /// like a table holding exactly these rows.
    Query {
        response: Result<Vec<T>, FrameworkError>,
    },
    Count {
        response: Result<usize, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A request that does not match the next expectation, or
/// arrives when none is left, panics the mock task and the caller sees `ActorDropped`.
pub struct MockClient<T: StoreEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoreEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoreEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "Unexpected id in get request");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Query { filter, respond_to },
                        Some(Expectation::Query { response }),
                    ) => {
                        let response = response.map(|rows| {
                            rows.into_iter()
                                .filter(|r| filter.matches(r))
                                .collect::<Vec<_>>()
                        });
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Count { respond_to },
                        Some(Expectation::Count { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `query` or `list` operation.
    pub fn expect_query(&mut self) -> QueryExpectationBuilder<T> {
        QueryExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `count` operation.
    pub fn expect_count(&mut self) -> CountExpectationBuilder<T> {
        CountExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: StoreEntity> {
    id: T::Id,
    expectations: Expectations<T>,
}

impl<T: StoreEntity> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Option<T>, FrameworkError>) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response,
        });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: StoreEntity> {
    expectations: Expectations<T>,
}

impl<T: StoreEntity> CreateExpectationBuilder<T> {
    pub fn return_ok(self, id: T::Id) {
        self.push(Ok(id));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T::Id, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create { response });
    }
}

/// Builder for `query` expectations.
pub struct QueryExpectationBuilder<T: StoreEntity> {
    expectations: Expectations<T>,
}

impl<T: StoreEntity> QueryExpectationBuilder<T> {
    pub fn return_ok(self, rows: Vec<T>) {
        self.push(Ok(rows));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Vec<T>, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Query { response });
    }
}

/// Builder for `count` expectations.
pub struct CountExpectationBuilder<T: StoreEntity> {
    expectations: Expectations<T>,
}

impl<T: StoreEntity> CountExpectationBuilder<T> {
    pub fn return_ok(self, count: usize) {
        self.push(Ok(count));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<usize, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Count { response });
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Use this when a test needs to inspect the request itself (the create payload, the filter)
/// before answering. [`MockClient`] is the more fluent option otherwise.
pub fn create_mock_client<T: StoreEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request.
pub async fn expect_create<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Query request.
pub async fn expect_query<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Filter<T>, oneshot::Sender<Result<Vec<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Query { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        id: u32,
        weight: u32,
    }

    #[derive(Debug)]
    struct ItemCreate {
        weight: u32,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Item error")]
    struct ItemError;

    impl StoreEntity for Item {
        type Id = u32;
        type Create = ItemCreate;
        type Context = ();
        type Error = ItemError;
        const TABLE: &'static str = "item";

        fn assign_id(_params: &ItemCreate, next: u32) -> u32 {
            next
        }

        fn from_create_params(id: u32, params: ItemCreate) -> Result<Self, ItemError> {
            Ok(Self {
                id,
                weight: params.weight,
            })
        }
    }

    #[tokio::test]
    async fn test_raw_channel_create() {
        let (client, mut receiver) = create_mock_client::<Item>(10);

        let create_task = tokio::spawn(async move { client.create(ItemCreate { weight: 7 }).await });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.weight, 7);
        responder.send(Ok(42)).unwrap();

        assert_eq!(create_task.await.unwrap().unwrap(), 42);
    }

    #[tokio::test]
    async fn test_raw_channel_query_exposes_filter() {
        let (client, mut receiver) = create_mock_client::<Item>(10);

        let query_task = tokio::spawn(async move { client.query(|i: &Item| i.weight > 5).await });

        let (filter, responder) = expect_query(&mut receiver)
            .await
            .expect("Expected Query request");
        assert!(filter.matches(&Item { id: 1, weight: 6 }));
        assert!(!filter.matches(&Item { id: 2, weight: 5 }));
        responder.send(Ok(vec![])).unwrap();

        assert!(query_task.await.unwrap().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mock_query_applies_filter() {
        let mut mock = MockClient::<Item>::new();
        mock.expect_query().return_ok(vec![
            Item { id: 1, weight: 3 },
            Item { id: 2, weight: 9 },
        ]);

        let heavy = mock.client().query(|i: &Item| i.weight > 5).await.unwrap();
        assert_eq!(heavy, vec![Item { id: 2, weight: 9 }]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_get_and_create_in_order() {
        let mut mock = MockClient::<Item>::new();
        mock.expect_create().return_ok(1);
        mock.expect_get(1).return_ok(Some(Item { id: 1, weight: 4 }));

        let client = mock.client();
        let id = client.create(ItemCreate { weight: 4 }).await.unwrap();
        let item = client.get(id).await.unwrap();
        assert_eq!(item, Some(Item { id: 1, weight: 4 }));
        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_error_injection() {
        let mut mock = MockClient::<Item>::new();
        mock.expect_create().return_err(FrameworkError::DuplicateKey {
            table: "item",
            id: "1".to_string(),
        });

        let err = mock.client().create(ItemCreate { weight: 1 }).await.unwrap_err();
        assert!(matches!(err, FrameworkError::DuplicateKey { .. }));
    }

    #[tokio::test]
    async fn test_mock_count() {
        let mut mock = MockClient::<Item>::new();
        mock.expect_count().return_ok(3);
        mock.expect_count().return_err(FrameworkError::ActorClosed);

        let client = mock.client();
        assert_eq!(client.count().await.unwrap(), 3);
        assert!(matches!(
            client.count().await.unwrap_err(),
            FrameworkError::ActorClosed
        ));
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_reports_unmet_expectations() {
        let mut mock = MockClient::<Item>::new();
        mock.expect_get(3).return_ok(None);
        mock.verify();
    }
}
