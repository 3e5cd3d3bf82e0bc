//! # Order Catalog
//!
//! A small order-management catalog (categories, products, orders, order lines) built on the
//! `store-actor` persistence API.
//!
//! ## Core Components
//!
//! - **[model]**: the records ([`Category`](model::Category), [`Product`](model::Product),
//!   [`Order`](model::Order), [`OrderLine`](model::OrderLine)) and their create payloads.
//! - **Actors**: one module per table ([`category_actor`], [`product_actor`], [`order_actor`],
//!   [`order_line_actor`]) with the `StoreEntity` implementation and a factory.
//! - **[clients]**: typed wrappers (e.g. [`ProductClient`](clients::ProductClient)) used as the
//!   per-entity services.
//! - **[services]**: [`ProductService`](services::ProductService), the finders joining products
//!   with orders.
//! - **[lifecycle]**: [`CatalogSystem`](lifecycle::CatalogSystem), the persistence context, and
//!   tracing setup.
//! - **[config]**: YAML configuration of the persistence context.
//! - **[demo]**: the scenarios run by the binary.
//!
//! ## Testing
//!
//! See [`store_actor::mock`] for utilities to test clients without spawning actors.

pub mod category_actor;
pub mod clients;
pub mod config;
pub mod demo;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod order_line_actor;
pub mod product_actor;
pub mod services;
