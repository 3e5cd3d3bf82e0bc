//! A dated customer request made of order lines.
//!
//! # Store Entity
//! [`Order`] implements [`StoreEntity`](store_actor::StoreEntity) (see
//! [`order_actor`](crate::order_actor)). Its id is generated by the order table.

use crate::error::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Date format used for textual order dates (`14/03/2013`).
pub const ORDER_DATE_FORMAT: &str = "%d/%m/%Y";

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    date: NaiveDate,
}

impl Order {
    pub fn new(id: OrderId, date: NaiveDate) -> Self {
        Self { id, date }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Payload for creating a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub date: NaiveDate,
}

/// Parses a `dd/mm/yyyy` date.
pub fn parse_order_date(input: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(input.trim(), ORDER_DATE_FORMAT).map_err(|_| {
        ValidationError::InvalidDate {
            input: input.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_day_month_year() {
        let date = parse_order_date("14/03/2013").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2013, 3, 14).unwrap());
    }

    #[test]
    fn rejects_malformed_dates() {
        for input in ["2013-03-14", "31/02/2013", ""] {
            assert_eq!(
                parse_order_date(input),
                Err(ValidationError::InvalidDate {
                    input: input.to_string()
                })
            );
        }
    }
}
