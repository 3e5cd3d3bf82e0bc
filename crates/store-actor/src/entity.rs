//! # StoreEntity Trait
//!
//! The `StoreEntity` trait is the contract every persisted record (Category, Product, Order, ...)
//! implements to be owned by a generic [`ResourceActor`](crate::ResourceActor). It names the
//! identifier, the creation payload, the injected context and the error type, and provides the
//! `on_create` hook where referential checks run before a record is stored.
//!
//! # Identifiers
//! Some records carry a natural key chosen by the caller (a category code, a product reference),
//! others get a generated one (an order number). [`StoreEntity::assign_id`] covers both: it
//! receives the creation payload and the table's next sequence number and returns the key.
//!
//! # Provided Methods (Hooks)
//! [`StoreEntity::on_create`] has a default implementation that accepts everything (`Ok(())`).
//! Override it when a record must look at other tables before it is accepted.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record must implement to be managed by a `ResourceActor`.
///
/// # Async & Context
/// This trait is `#[async_trait]` so hooks can await other actors. The `Context` type is injected
/// into every hook at `run()` time ("late binding"), so a table can depend on clients of other
/// tables without those being known when the actor is constructed.
#[async_trait]
pub trait StoreEntity: Clone + Send + Sync + 'static {
    /// The primary key. `Ord` keeps table scans in key order.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new record (DTO).
    type Create: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this record.
    ///
    /// Errors are boxed by the actor and travel back to the caller inside
    /// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError), where typed clients
    /// can downcast them again.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Short table name used in logs, errors and snapshot file names.
    const TABLE: &'static str;

    /// Derive the primary key of a record about to be created.
    ///
    /// `next` is the table's sequence counter. It only advances when a record is stored.
    fn assign_id(params: &Self::Create, next: u32) -> Self::Id;

    /// Construct the full record from its key and payload.
    /// This is called synchronously before `on_create`; failing here means nothing is stored.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction and before the record is inserted.
    /// Use this hook to check foreign keys against other actors.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
