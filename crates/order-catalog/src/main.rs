//! # Order Catalog
//!
//! Runs the eight catalog scenarios and prints the report on standard output.
//!
//! - **Configuration**: `ORDER_CATALOG_CONFIG`, else `order-catalog.yaml`, else defaults (see
//!   [`order_catalog::config`]).
//! - **Diagnostics**: standard error, filtered by `RUST_LOG` or `logging.filter`.
//! - **Exit code**: `0` on success, otherwise [`CatalogError::exit_code`].

use order_catalog::config::{resolve_config, CatalogConfig};
use order_catalog::demo::run_scenarios;
use order_catalog::error::CatalogError;
use order_catalog::lifecycle::{setup_tracing, CatalogSystem};
use std::io::Write;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = match resolve_config() {
        Ok(config) => config,
        Err(e) => {
            setup_tracing(&CatalogConfig::default().logging.filter);
            return report_failure(e.into());
        }
    };
    setup_tracing(&config.logging.filter);

    info!(backend = ?config.persistence.backend, "Starting order catalog");

    let system = CatalogSystem::new(&config.persistence);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = run_scenarios(&system, &mut out).await;
    let flushed = out.flush();
    drop(out);

    // The context is released on every path, including after a failed scenario.
    let released = system.shutdown().await;

    let result = outcome
        .and(flushed.map_err(CatalogError::from))
        .and(released);
    match result {
        Ok(()) => {
            info!("Order catalog completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => report_failure(e),
    }
}

fn report_failure(e: CatalogError) -> ExitCode {
    error!(error = %e, "Order catalog failed");
    eprintln!("Erreur lors de l'exécution des tests: {e}");
    ExitCode::from(e.exit_code())
}
