//! # Store Actor
//!
//! > **Tables as actors: one Tokio task owns each table of records.**
//!
//! This crate is the generic persistence API behind the order catalog. Each entity type gets a
//! [`ResourceActor`] that owns its rows in an [`EntityStore`], and any number of cloneable
//! [`ResourceClient`] handles that talk to it over channels.
//!
//! ## Core Concepts
//!
//! - [`StoreEntity`]: what a record must provide (key derivation, construction, `on_create`
//!   hook, error type).
//! - [`ResourceActor`]: the request loop. Handles `Create`, `Get`, `Query` and `Count`, and
//!   flushes its store when the last client is dropped.
//! - [`ResourceClient`]: the async handle. `create`, `get`, `query`, `list`, `count`.
//! - [`ActorClient`]: helper trait for typed wrappers that map [`FrameworkError`] into their
//!   own error type.
//! - [`EntityStore`]: storage backend; [`MemoryStore`] and [`JsonSnapshotStore`] ship here.
//!
//! ## Referential Checks
//!
//! A record that points at another table (a product at its category) receives that table's
//! client through its `Context` and checks the reference in `on_create`. Nothing is inserted
//! when the hook fails.
//!
//! ## Testing
//!
//! See the [`mock`] module for utilities to test clients without spawning actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::StoreEntity;
pub use error::{FrameworkError, StoreError};
pub use message::{Filter, ResourceRequest, Response};
pub use store::{EntityStore, JsonSnapshotStore, MemoryStore};
