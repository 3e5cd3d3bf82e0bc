//! # Order Line Actor
//!
//! Owns the `order_line` table, keyed by `(order, product)`.
//!
//! The actor depends on two tables, so its context is the pair `(OrderClient, ProductClient)`.
//! Both references are checked in `on_create`; the order first.
//!
//! ## Shutdown order
//!
//! Because this actor holds clones of the order and product clients, those actors only stop
//! after this one has. [`CatalogSystem::shutdown`](crate::lifecycle::CatalogSystem::shutdown)
//! awaits the tables in dependency order.

pub mod entity;

use crate::config::PersistenceConfig;
use crate::model::OrderLine;
use store_actor::{ResourceActor, ResourceClient};

/// Creates a new OrderLine actor and its client.
pub fn new(
    persistence: &PersistenceConfig,
) -> (ResourceActor<OrderLine>, ResourceClient<OrderLine>) {
    ResourceActor::with_store(
        persistence.channel_capacity,
        persistence.open_store::<OrderLine>(),
    )
}
