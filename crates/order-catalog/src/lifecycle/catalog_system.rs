use crate::clients::{CategoryClient, OrderClient, OrderLineClient, ProductClient};
use crate::config::PersistenceConfig;
use crate::error::{CatalogError, PersistenceError};
use crate::services::ProductService;
use crate::{category_actor, order_actor, order_line_actor, product_actor};
use store_actor::FrameworkError;
use tokio::task::JoinHandle;
use tracing::{error, info};

type ActorHandle = (&'static str, JoinHandle<Result<(), FrameworkError>>);

/// The persistence context of the catalog: one running actor per table plus their clients.
///
/// `CatalogSystem` is responsible for:
/// - **Dependency Wiring**: products check categories, order lines check orders and products
/// - **Lifecycle Management**: starting every table and releasing them exactly once
///
/// # Example
///
/// ```rust
/// use order_catalog::lifecycle::CatalogSystem;
/// use order_catalog::model::CategoryCreate;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> Result<(), order_catalog::error::CatalogError> {
///     let system = CatalogSystem::in_memory();
///
///     system
///         .categories()
///         .create_category(CategoryCreate {
///             code: "CAT1".to_string(),
///             label: "Ordinateurs".to_string(),
///         })
///         .await?;
///     let products = system.products().find_by_category(&"CAT1".into()).await?;
///     assert!(products.is_empty());
///
///     system.shutdown().await
/// }
/// ```
pub struct CatalogSystem {
    categories: CategoryClient,
    products: ProductClient,
    orders: OrderClient,
    order_lines: OrderLineClient,

    /// Actor tasks in shutdown order: dependents before the tables they reference.
    handles: Vec<ActorHandle>,
}

impl CatalogSystem {
    /// Starts every table on the configured backend.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(persistence: &PersistenceConfig) -> Self {
        // 1. Create actors (no dependencies yet)
        let (category_actor, category_client) = category_actor::new(persistence);
        let (product_actor, product_client) = product_actor::new(persistence);
        let (order_actor, order_client) = order_actor::new(persistence);
        let (order_line_actor, order_line_client) = order_line_actor::new(persistence);

        let categories = CategoryClient::new(category_client);
        let products = ProductClient::new(product_client);
        let orders = OrderClient::new(order_client);
        let order_lines = OrderLineClient::new(order_line_client);

        // 2. Start actors with their dependencies injected
        let category_handle = tokio::spawn(category_actor.run(()));
        let product_handle = tokio::spawn(product_actor.run(categories.clone()));
        let order_handle = tokio::spawn(order_actor.run(()));
        let order_line_handle =
            tokio::spawn(order_line_actor.run((orders.clone(), products.clone())));

        info!(backend = ?persistence.backend, "Persistence context opened");

        Self {
            categories,
            products,
            orders,
            order_lines,
            handles: vec![
                ("order_line", order_line_handle),
                ("product", product_handle),
                ("order", order_handle),
                ("category", category_handle),
            ],
        }
    }

    /// Starts every table in memory.
    pub fn in_memory() -> Self {
        Self::new(&PersistenceConfig::default())
    }

    pub fn categories(&self) -> &CategoryClient {
        &self.categories
    }

    pub fn products(&self) -> ProductService<'_> {
        ProductService::new(&self.products, &self.orders, &self.order_lines)
    }

    pub fn orders(&self) -> &OrderClient {
        &self.orders
    }

    pub fn order_lines(&self) -> &OrderLineClient {
        &self.order_lines
    }

    /// Releases the persistence context.
    ///
    /// Dropping the clients closes every table. Each actor flushes its store as it stops, and
    /// every table is awaited even if an earlier one failed; the first failure is returned.
    pub async fn shutdown(self) -> Result<(), CatalogError> {
        info!("Shutting down catalog...");

        let Self {
            categories,
            products,
            orders,
            order_lines,
            handles,
        } = self;
        drop(order_lines);
        drop(orders);
        drop(products);
        drop(categories);

        let mut first_error = None;
        for (table, handle) in handles {
            let outcome = match handle.await {
                Ok(result) => result.map_err(CatalogError::from),
                Err(e) => Err(CatalogError::from(PersistenceError::Storage(format!(
                    "{table} actor task failed: {e}"
                )))),
            };
            if let Err(e) = outcome {
                error!(table, error = %e, "Table did not shut down cleanly");
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => {
                info!("Catalog shutdown complete.");
                Ok(())
            }
        }
    }
}
