//! # Product Actor
//!
//! Owns the `product` table.
//!
//! ## Overview
//!
//! A product belongs to exactly one category. The actor receives a
//! [`CategoryClient`](crate::clients::CategoryClient) as its
//! context, and [`Product::on_create`](store_actor::StoreEntity::on_create) looks the category
//! up before the product is stored. A missing category fails with
//! [`PersistenceError::DanglingReference`](crate::error::PersistenceError::DanglingReference).
//!
//! ## Structure
//!
//! - [`entity`] - [`StoreEntity`](store_actor::StoreEntity) implementation for [`Product`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use order_catalog::clients::{CategoryClient, ProductClient};
//! use order_catalog::config::PersistenceConfig;
//! use order_catalog::model::{CategoryCreate, ProductCreate};
//! use order_catalog::{category_actor, product_actor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let persistence = PersistenceConfig::default();
//!     let (category_actor, categories) = category_actor::new(&persistence);
//!     let (product_actor, products) = product_actor::new(&persistence);
//!     let categories = CategoryClient::new(categories);
//!     let products = ProductClient::new(products);
//!
//!     // The product actor depends on the category table.
//!     tokio::spawn(category_actor.run(()));
//!     tokio::spawn(product_actor.run(categories.clone()));
//!
//!     categories
//!         .create_category(CategoryCreate {
//!             code: "CAT1".to_string(),
//!             label: "Ordinateurs".to_string(),
//!         })
//!         .await?;
//!     let reference = products
//!         .create_product(ProductCreate {
//!             reference: "ES12".to_string(),
//!             price: 120.0,
//!             category: "CAT1".into(),
//!         })
//!         .await?;
//!     assert_eq!(reference.to_string(), "ES12");
//!     Ok(())
//! }
//! ```

pub mod entity;

use crate::config::PersistenceConfig;
use crate::model::Product;
use store_actor::{ResourceActor, ResourceClient};

/// Creates a new Product actor and its client.
///
/// Run it with a [`CategoryClient`](crate::clients::CategoryClient) as context.
pub fn new(persistence: &PersistenceConfig) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::with_store(
        persistence.channel_capacity,
        persistence.open_store::<Product>(),
    )
}
