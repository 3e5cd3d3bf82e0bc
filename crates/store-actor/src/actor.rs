//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns one table of records. It is
//! the "Server" side of the actor model: requests are processed sequentially, so the store needs
//! no locking.

use crate::client::ResourceClient;
use crate::entity::StoreEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::store::{EntityStore, MemoryStore};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// The generic actor that owns the records of one entity type.
///
/// # Architecture Note
/// This struct holds the store and the receiver end of the channel. Each instance runs in its own
/// Tokio task and handles one request at a time, which gives exclusive access to the store
/// without `Mutex` or `RwLock`.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` (memory table) or `with_store()` to get the
///     actor and its client.
/// 2.  **Wire**: Clone clients of other tables into this actor's `Context`.
/// 3.  **Run**: Spawn `actor.run(context)` in a background task.
///
/// ```rust
/// use store_actor::{ResourceActor, StoreEntity};
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug)] struct NoteCreate { text: String }
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// impl StoreEntity for Note {
///     type Id = u32;
///     type Create = NoteCreate;
///     type Context = ();
///     type Error = NoteError;
///     const TABLE: &'static str = "note";
///
///     fn assign_id(_: &NoteCreate, next: u32) -> u32 { next }
///     fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, NoteError> {
///         Ok(Self { id, text: params.text })
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(10);
///     let handle = tokio::spawn(actor.run(()));
///
///     let id = client.create(NoteCreate { text: "hello".into() }).await.unwrap();
///     assert_eq!(client.get(id).await.unwrap().unwrap().text, "hello");
///
///     drop(client);
///     handle.await.unwrap().unwrap();
/// }
/// ```
///
/// # Operations
///
/// * **Create**:
///     1. Derives the key with `T::assign_id` from the payload and the sequence counter.
///     2. Builds the record with `T::from_create_params`, so field errors win over key clashes.
///     3. Rejects the request with `DuplicateKey` if the key is taken, then runs `on_create`.
///     4. Inserts the record and advances the sequence counter.
///
/// * **Get**: Returns a clone of the record, or `None`.
///
/// * **Query**: Returns clones of all records accepted by the filter, in key order.
///
/// * **Count**: Returns the table size.
///
/// When every client is dropped the loop ends and the store is flushed.
pub struct ResourceActor<T: StoreEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Box<dyn EntityStore<T>>,
    next_id: u32,
}

impl<T: StoreEntity> ResourceActor<T> {
    /// Creates an actor backed by a [`MemoryStore`], and its client.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full, client calls wait.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::with_store(buffer_size, Box::new(MemoryStore::new()))
    }

    /// Creates an actor backed by the given store, and its client.
    pub fn with_store(
        buffer_size: usize,
        store: Box<dyn EntityStore<T>>,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store,
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until the channel closes, then flushes the store.
    ///
    /// # Context Injection
    /// `context` is passed to every `on_create` hook. It usually holds clients of the tables this
    /// one references.
    pub async fn run(mut self, context: T::Context) -> Result<(), FrameworkError> {
        let entity_type = T::TABLE;
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Query { filter, respond_to } => {
                    let rows: Vec<T> = self
                        .store
                        .values()
                        .filter(|item| filter.matches(item))
                        .cloned()
                        .collect();
                    debug!(entity_type, matched = rows.len(), size = self.store.len(), "Query");
                    let _ = respond_to.send(Ok(rows));
                }
                ResourceRequest::Count { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.len()));
                }
            }
        }

        if let Err(e) = self.store.flush() {
            error!(entity_type, error = %e, "Flush failed");
            return Err(e.into());
        }
        info!(entity_type, size = self.store.len(), "Shutdown");
        Ok(())
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T::Id, FrameworkError> {
        let entity_type = T::TABLE;
        let id = T::assign_id(&params, self.next_id);

        let mut item = T::from_create_params(id.clone(), params).map_err(|e| {
            warn!(entity_type, error = %e, "Create failed");
            FrameworkError::EntityError(Box::new(e))
        })?;

        if self.store.contains(&id) {
            warn!(entity_type, %id, "Duplicate key");
            return Err(FrameworkError::DuplicateKey {
                table: entity_type,
                id: id.to_string(),
            });
        }

        if let Err(e) = item.on_create(context).await {
            warn!(entity_type, %id, error = %e, "on_create failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }

        self.store.insert(id.clone(), item);
        self.next_id += 1;
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(id)
    }
}
