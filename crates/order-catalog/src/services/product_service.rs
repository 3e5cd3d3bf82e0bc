//! # Product Service
//!
//! The product repository of the catalog. Creation and single-table finders delegate to the
//! [`ProductClient`]; the order-based finders join three tables outside the actors, so no table
//! ever waits on a query of another.
//!
//! All finders return an empty list when nothing matches.

use crate::clients::{OrderClient, OrderLineClient, ProductClient};
use crate::error::CatalogError;
use crate::model::{CategoryCode, OrderId, Product, ProductCreate, ProductRef};
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};
use store_actor::ActorClient;
use tracing::{debug, instrument};

/// One row of an order's product table: the product and the quantity ordered.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedProduct {
    pub reference: ProductRef,
    pub price: f64,
    pub quantity: u32,
}

/// Product finders over the catalog tables.
///
/// Borrowed from [`CatalogSystem::products`](crate::lifecycle::CatalogSystem::products).
#[derive(Clone, Copy)]
pub struct ProductService<'a> {
    products: &'a ProductClient,
    orders: &'a OrderClient,
    lines: &'a OrderLineClient,
}

impl<'a> ProductService<'a> {
    pub fn new(
        products: &'a ProductClient,
        orders: &'a OrderClient,
        lines: &'a OrderLineClient,
    ) -> Self {
        Self {
            products,
            orders,
            lines,
        }
    }

    pub async fn create(&self, params: ProductCreate) -> Result<ProductRef, CatalogError> {
        self.products.create_product(params).await
    }

    pub async fn get(&self, reference: ProductRef) -> Result<Option<Product>, CatalogError> {
        self.products.get(reference).await
    }

    pub async fn list(&self) -> Result<Vec<Product>, CatalogError> {
        self.products.list().await
    }

    pub async fn find_by_category(
        &self,
        category: &CategoryCode,
    ) -> Result<Vec<Product>, CatalogError> {
        self.products.find_by_category(category).await
    }

    /// Products priced strictly above `threshold`.
    pub async fn find_by_price_above(&self, threshold: f64) -> Result<Vec<Product>, CatalogError> {
        self.products.find_by_price_above(threshold).await
    }

    /// The products of one order with the quantity of each, in reference order.
    ///
    /// An unknown order, or one without lines, yields an empty list.
    #[instrument(skip(self))]
    pub async fn find_products_for_order(
        &self,
        order: OrderId,
    ) -> Result<Vec<OrderedProduct>, CatalogError> {
        let lines = self.lines.lines_for_order(order).await?;
        if lines.is_empty() {
            return Ok(Vec::new());
        }

        let quantities: BTreeMap<ProductRef, u32> = lines
            .into_iter()
            .map(|line| (line.product().clone(), line.quantity()))
            .collect();
        let products = self
            .products
            .find_by_references(quantities.keys().cloned().collect())
            .await?;

        let rows: Vec<OrderedProduct> = products
            .into_iter()
            .filter_map(|product| {
                quantities.get(product.reference()).map(|&quantity| OrderedProduct {
                    reference: product.reference().clone(),
                    price: product.price(),
                    quantity,
                })
            })
            .collect();
        debug!(rows = rows.len(), "Joined order lines");
        Ok(rows)
    }

    /// Distinct products appearing in any order dated within `[start, end]`, in reference
    /// order. Empty when `start > end`.
    #[instrument(skip(self))]
    pub async fn find_products_ordered_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Product>, CatalogError> {
        let orders: BTreeSet<OrderId> = self
            .orders
            .orders_between(start, end)
            .await?
            .iter()
            .map(|order| order.id())
            .collect();
        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let references: BTreeSet<ProductRef> = self
            .lines
            .lines_for_orders(orders)
            .await?
            .iter()
            .map(|line| line.product().clone())
            .collect();
        debug!(products = references.len(), "Products ordered in range");
        self.products.find_by_references(references).await
    }
}
