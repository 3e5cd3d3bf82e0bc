//! Catalog configuration.
//!
//! The persistence context is wired from a small YAML file:
//!
//! ```yaml
//! persistence:
//!   backend: json          # memory | json
//!   snapshot_dir: ./data
//!   channel_capacity: 32
//! logging:
//!   filter: info
//! ```
//!
//! Every field has a default, so the file is optional.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use store_actor::{EntityStore, JsonSnapshotStore, MemoryStore, StoreEntity};
use thiserror::Error;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "ORDER_CATALOG_CONFIG";

/// File looked up in the working directory when the variable is unset.
pub const DEFAULT_CONFIG_FILE: &str = "order-catalog.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse config YAML: {0}")]
    Parse(String),

    #[error("Config validation failed: {0}")]
    Invalid(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub persistence: PersistenceConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the tables keep their rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Rows live in memory for the lifetime of the context.
    #[default]
    Memory,
    /// Rows live in memory and are written to `<snapshot_dir>/<table>.json` on release.
    Json,
}

/// Persistence context settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistenceConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default = "default_snapshot_dir")]
    pub snapshot_dir: PathBuf,
    /// Request queue length of each table actor.
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            snapshot_dir: default_snapshot_dir(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

impl PersistenceConfig {
    /// Opens an empty store for table `T` on the configured backend.
    pub fn open_store<T: StoreEntity + Serialize>(&self) -> Box<dyn EntityStore<T>> {
        match self.backend {
            StorageBackend::Memory => Box::new(MemoryStore::new()),
            StorageBackend::Json => Box::new(JsonSnapshotStore::new(&self.snapshot_dir)),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_snapshot_dir() -> PathBuf {
    PathBuf::from("./data")
}

const fn default_channel_capacity() -> usize {
    32
}

fn default_log_filter() -> String {
    "warn".to_string()
}

/// Load configuration from a YAML file.
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: &Path) -> Result<CatalogConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    load_config_from_str(&contents)
}

/// Load configuration from a YAML string.
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_str(yaml: &str) -> Result<CatalogConfig, ConfigError> {
    let config: CatalogConfig =
        serde_yaml_bw::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Resolve the configuration of the binary.
///
/// Uses the file named by [`CONFIG_ENV_VAR`] if set (it must exist), else
/// [`DEFAULT_CONFIG_FILE`] if present, else defaults.
pub fn resolve_config() -> Result<CatalogConfig, ConfigError> {
    let explicit = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    resolve_config_from(explicit.as_deref(), Path::new(DEFAULT_CONFIG_FILE))
}

/// An `explicit` path must exist; `fallback` is only read when present.
fn resolve_config_from(
    explicit: Option<&Path>,
    fallback: &Path,
) -> Result<CatalogConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    if fallback.exists() {
        return load_config(fallback);
    }
    Ok(CatalogConfig::default())
}

fn validate_config(config: &CatalogConfig) -> Result<(), ConfigError> {
    let persistence = &config.persistence;
    if persistence.channel_capacity == 0 {
        return Err(ConfigError::Invalid(
            "persistence.channel_capacity must be greater than 0".to_string(),
        ));
    }
    if persistence.backend == StorageBackend::Json && persistence.snapshot_dir.as_os_str().is_empty()
    {
        return Err(ConfigError::Invalid(
            "persistence.snapshot_dir is required for the json backend".to_string(),
        ));
    }
    Ok(())
}
