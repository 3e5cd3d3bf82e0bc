//! # Generic Messages
//!
//! This module defines the message types exchanged between a `ResourceClient` and its
//! `ResourceActor`.

use crate::entity::StoreEntity;
use crate::error::FrameworkError;
use std::fmt;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// A row predicate evaluated inside the actor against every stored record.
pub struct Filter<T>(Box<dyn Fn(&T) -> bool + Send + Sync>);

impl<T> Filter<T> {
    pub fn new(predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self(Box::new(predicate))
    }

    /// A filter that matches every record.
    pub fn all() -> Self {
        Self::new(|_| true)
    }

    pub fn matches(&self, item: &T) -> bool {
        (self.0)(item)
    }
}

impl<T> fmt::Debug for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Filter(..)")
    }
}

/// Internal message type sent to the actor to request operations.
///
/// # Create-and-Read Resources
/// Records are written once and then only read:
///
/// - **Create**: Uses [`StoreEntity::Create`] to build, check and insert a new record.
/// - **Get**: Fetches one record by primary key.
/// - **Query**: Returns every record accepted by a [`Filter`], in key order.
/// - **Count**: Returns the number of stored records.
///
/// The enum is generic over `T: StoreEntity`, so a `ProductCreate` payload can never reach the
/// category table.
#[derive(Debug)]
pub enum ResourceRequest<T: StoreEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Query {
        filter: Filter<T>,
        respond_to: Response<Vec<T>>,
    },
    Count {
        respond_to: Response<usize>,
    },
}
