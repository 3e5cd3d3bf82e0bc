//! Type-safe wrappers around [`ResourceClient`](store_actor::ResourceClient), one per table.
//!
//! Every client implements [`ActorClient`](store_actor::ActorClient) with
//! [`CatalogError`](crate::error::CatalogError) as its error type, so `get`, `require`, `list`
//! and `count` are available on all of them.

pub mod category_client;
pub mod order_client;
pub mod order_line_client;
pub mod product_client;

pub use category_client::*;
pub use order_client::*;
pub use order_line_client::*;
pub use product_client::*;
