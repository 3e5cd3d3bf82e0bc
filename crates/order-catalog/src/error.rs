//! Error taxonomy of the catalog.
//!
//! - [`ValidationError`]: a record's own fields are wrong. Nothing is stored.
//! - [`PersistenceError`]: the store refused the record (duplicate key, dangling reference) or
//!   the persistence context itself failed.
//! - [`CatalogError::NotFound`]: an explicit lookup missed. Finder queries never produce it;
//!   they return empty lists instead.
//!
//! Every table uses [`CatalogError`] as its entity error, so a failure raised inside an actor
//! hook reaches the caller with its kind intact (see the `From<FrameworkError>` impl).

use crate::config::ConfigError;
use store_actor::FrameworkError;
use thiserror::Error;

/// A record failed construction checks.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Category code must not be empty")]
    EmptyCategoryCode,

    #[error("Product reference must not be empty")]
    EmptyProductReference,

    /// Negative or NaN.
    #[error("Price must be a non-negative number, got {0}")]
    InvalidPrice(f64),

    #[error("Quantity must be positive, got {0}")]
    InvalidQuantity(u32),

    #[error("Invalid date '{input}', expected dd/mm/yyyy")]
    InvalidDate { input: String },
}

/// The store refused a write, or the persistence context is unusable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PersistenceError {
    #[error("Duplicate {entity} key: {id}")]
    DuplicateKey { entity: &'static str, id: String },

    #[error("{entity} references a missing {reference}")]
    DanglingReference {
        entity: &'static str,
        reference: String,
    },

    #[error("Persistence context is closed")]
    ContextClosed,

    #[error("Storage failure: {0}")]
    Storage(String),
}

/// Top-level error of every catalog operation.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Persistence failed: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to write report: {0}")]
    Report(#[from] std::io::Error),
}

impl CatalogError {
    /// Process exit code for this kind of failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            CatalogError::Report(_) => 1,
            CatalogError::Validation(_) => 2,
            CatalogError::Persistence(_) => 3,
            CatalogError::NotFound { .. } => 4,
            CatalogError::Config(_) => 5,
        }
    }
}

impl From<FrameworkError> for CatalogError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::ActorClosed | FrameworkError::ActorDropped => {
                PersistenceError::ContextClosed.into()
            }
            FrameworkError::DuplicateKey { table, id } => {
                PersistenceError::DuplicateKey { entity: table, id }.into()
            }
            FrameworkError::Storage(e) => PersistenceError::Storage(e.to_string()).into(),
            FrameworkError::EntityError(inner) => match inner.downcast::<CatalogError>() {
                Ok(catalog) => *catalog,
                Err(other) => PersistenceError::Storage(other.to_string()).into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_errors_keep_their_kind_through_the_framework() {
        let boxed = FrameworkError::EntityError(Box::new(CatalogError::from(
            ValidationError::InvalidPrice(-1.0),
        )));
        let err = CatalogError::from(boxed);
        assert!(matches!(
            err,
            CatalogError::Validation(ValidationError::InvalidPrice(p)) if p == -1.0
        ));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn framework_failures_map_to_persistence_errors() {
        let dup = CatalogError::from(FrameworkError::DuplicateKey {
            table: "category",
            id: "CAT1".into(),
        });
        assert!(matches!(
            dup,
            CatalogError::Persistence(PersistenceError::DuplicateKey { entity: "category", ref id }) if id == "CAT1"
        ));

        let closed = CatalogError::from(FrameworkError::ActorClosed);
        assert!(matches!(
            closed,
            CatalogError::Persistence(PersistenceError::ContextClosed)
        ));
        assert_eq!(closed.exit_code(), 3);
    }

    #[test]
    fn foreign_entity_errors_become_storage_failures() {
        let foreign = FrameworkError::EntityError(Box::new(std::io::Error::other("disk gone")));
        match CatalogError::from(foreign) {
            CatalogError::Persistence(PersistenceError::Storage(msg)) => {
                assert!(msg.contains("disk gone"))
            }
            other => panic!("Expected Storage error, got {other:?}"),
        }
    }

    #[test]
    fn config_and_report_failures_have_their_own_exit_codes() {
        let config = CatalogError::from(ConfigError::Invalid("bad".into()));
        assert_eq!(config.exit_code(), 5);

        let report = CatalogError::from(std::io::Error::other("broken pipe"));
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn not_found_has_its_own_exit_code() {
        let err = CatalogError::NotFound {
            entity: "category",
            id: "CAT9".into(),
        };
        assert_eq!(err.to_string(), "category not found: CAT9");
        assert_eq!(err.exit_code(), 4);
    }
}
