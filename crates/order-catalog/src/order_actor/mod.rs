//! # Order Actor
//!
//! Owns the `order` table. Order ids come from the table's sequence: the first stored order is
//! `1`, and a rejected create does not consume a number.

pub mod entity;

use crate::config::PersistenceConfig;
use crate::model::Order;
use store_actor::{ResourceActor, ResourceClient};

/// Creates a new Order actor and its client.
pub fn new(persistence: &PersistenceConfig) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::with_store(
        persistence.channel_capacity,
        persistence.open_store::<Order>(),
    )
}
