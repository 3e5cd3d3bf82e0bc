use crate::error::ValidationError;
use crate::model::{OrderId, ProductRef};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Composite key of an [`OrderLine`]: one line per product within an order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderLineId {
    pub order: OrderId,
    pub product: ProductRef,
}

impl Display for OrderLineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.order, self.product)
    }
}

/// Quantity of one product within one order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    order: OrderId,
    product: ProductRef,
    quantity: u32,
}

impl OrderLine {
    /// Creates an order line. Fails if `quantity` is zero.
    pub fn new(order: OrderId, product: ProductRef, quantity: u32) -> Result<Self, ValidationError> {
        if quantity == 0 {
            return Err(ValidationError::InvalidQuantity(quantity));
        }
        Ok(Self {
            order,
            product,
            quantity,
        })
    }

    pub fn id(&self) -> OrderLineId {
        OrderLineId {
            order: self.order,
            product: self.product.clone(),
        }
    }

    pub fn order(&self) -> OrderId {
        self.order
    }

    pub fn product(&self) -> &ProductRef {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Payload for creating a new order line.
#[derive(Debug, Clone)]
pub struct OrderLineCreate {
    pub order: OrderId,
    pub product: ProductRef,
    pub quantity: u32,
}
