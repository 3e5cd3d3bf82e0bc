//! Plain records of the catalog and their creation payloads.
//!
//! Constructors validate fields and return [`ValidationError`](crate::error::ValidationError);
//! the records are immutable once built and reference each other by key only.

pub mod category;
pub mod order;
pub mod order_line;
pub mod product;

pub use category::*;
pub use order::*;
pub use order_line::*;
pub use product::*;
