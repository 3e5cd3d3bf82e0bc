//! Services that span more than one table.
//!
//! Single-table operations live on the clients themselves; the product service adds the
//! finders that join products with orders and order lines.

pub mod product_service;

pub use product_service::*;
