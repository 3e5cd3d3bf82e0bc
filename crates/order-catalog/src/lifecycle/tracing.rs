//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter on standard error, so
//! diagnostics never mix with the report printed on standard output.
//!
//! The filter comes from `RUST_LOG` when it is set, and from the configured
//! `logging.filter` otherwise:
//!
//! ```bash
//! RUST_LOG=info order-catalog     # one line per stored record
//! RUST_LOG=debug order-catalog    # every request with its payload
//! ```
//!
//! With `RUST_LOG=info` a run looks like:
//!
//! ```text
//! INFO Persistence context opened backend=Memory
//! INFO Actor started entity_type="category"
//! INFO create_category{params=CategoryCreate { code: "CAT1", label: "Ordinateurs" }}: Created entity_type="category" id=CAT1 size=1
//! INFO Shutdown entity_type="order_line" size=5
//! ```
use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber. Later calls are ignored.
pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false) // Don't show module paths - entity_type says which table
        .compact()
        .try_init();
}
