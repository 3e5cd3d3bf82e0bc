//! # System Lifecycle
//!
//! Starting, wiring and releasing the tables of the catalog.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created without their dependencies and receive them at `run(context)` time:
//!
//! ```rust,ignore
//! impl StoreEntity for Category  { type Context = (); }
//! impl StoreEntity for Product   { type Context = CategoryClient; }
//! impl StoreEntity for Order     { type Context = (); }
//! impl StoreEntity for OrderLine { type Context = (OrderClient, ProductClient); }
//! ```
//!
//! The dependency graph is acyclic and no table holds a client of itself, so closing the
//! channels is enough to stop everything.
//!
//! ## Release
//!
//! [`CatalogSystem::shutdown`] consumes the system:
//!
//! 1. **Drop all clients** - the senders held by the system go away
//! 2. **Dependents stop first** - the order line actor exits, dropping its order and product
//!    clients, then the product actor exits and drops its category client
//! 3. **Flush** - each store is flushed as its actor stops (JSON snapshots are written here)
//! 4. **Await completion** - every task is joined and the first failure is reported
//!
//! Services such as [`ProductService`](crate::services::ProductService) borrow the system, so
//! they cannot outlive the release.
//!
//! ## Observability
//!
//! See [`setup_tracing`].

pub mod catalog_system;
pub mod tracing;

pub use catalog_system::*;
pub use self::tracing::setup_tracing;
