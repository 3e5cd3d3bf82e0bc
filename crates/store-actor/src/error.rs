//! # Framework Errors
//!
//! Error types shared by every actor, client and store in this crate.

/// Errors raised by an [`EntityStore`](crate::EntityStore) backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Snapshot I/O failed for {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Snapshot encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors that can occur within the framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Duplicate key in {table}: {id}")]
    DuplicateKey { table: &'static str, id: String },
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
