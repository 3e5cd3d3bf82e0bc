//! A priced item belonging to exactly one category.
//!
//! # Store Entity
//! [`Product`] implements [`StoreEntity`](store_actor::StoreEntity) (see
//! [`product_actor`](crate::product_actor)); its category is checked for existence when the
//! product is created.

use crate::error::ValidationError;
use crate::model::CategoryCode;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Natural key of a [`Product`] (e.g. `ES12`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductRef(pub String);

impl From<&str> for ProductRef {
    fn from(reference: &str) -> Self {
        Self(reference.to_string())
    }
}

impl Display for ProductRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    reference: ProductRef,
    price: f64,
    category: CategoryCode,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `reference` - Unique, non-blank reference
    /// * `price` - Unit price, must be zero or more
    /// * `category` - Code of the owning category
    pub fn new(
        reference: impl Into<String>,
        price: f64,
        category: CategoryCode,
    ) -> Result<Self, ValidationError> {
        let reference = reference.into();
        if reference.trim().is_empty() {
            return Err(ValidationError::EmptyProductReference);
        }
        // Written so that NaN fails too.
        if !(price >= 0.0) {
            return Err(ValidationError::InvalidPrice(price));
        }
        Ok(Self {
            reference: ProductRef(reference),
            price,
            category,
        })
    }

    pub fn reference(&self) -> &ProductRef {
        &self.reference
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn category(&self) -> &CategoryCode {
        &self.category
    }
}

/// Payload for creating a new product.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub reference: String,
    pub price: f64,
    pub category: CategoryCode,
}
