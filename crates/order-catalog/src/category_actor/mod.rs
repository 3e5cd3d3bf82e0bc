//! # Category Actor
//!
//! Owns the `category` table. Categories depend on nothing, so the actor runs with an empty
//! context:
//!
//! ```rust
//! use order_catalog::category_actor;
//! use order_catalog::clients::CategoryClient;
//! use order_catalog::config::PersistenceConfig;
//! use order_catalog::model::CategoryCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = category_actor::new(&PersistenceConfig::default());
//!     let client = CategoryClient::new(generic_client);
//!     let handle = tokio::spawn(actor.run(()));
//!
//!     let code = client
//!         .create_category(CategoryCreate {
//!             code: "CAT1".to_string(),
//!             label: "Ordinateurs".to_string(),
//!         })
//!         .await?;
//!     assert_eq!(code.to_string(), "CAT1");
//!
//!     drop(client);
//!     handle.await??;
//!     Ok(())
//! }
//! ```

pub mod entity;

use crate::config::PersistenceConfig;
use crate::model::Category;
use store_actor::{ResourceActor, ResourceClient};

/// Creates a new Category actor and its client.
pub fn new(persistence: &PersistenceConfig) -> (ResourceActor<Category>, ResourceClient<Category>) {
    ResourceActor::with_store(
        persistence.channel_capacity,
        persistence.open_store::<Category>(),
    )
}
