//! Configuration for the commerce engine.
//!
//! Loaded from a YAML file with per-field defaults, so an empty document is a
//! valid configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse the YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Pagination limits for listing queries.
    #[serde(default)]
    pub pagination: PaginationConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Pagination limits applied to listing queries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Page size substituted when a request asks for zero.
    #[serde(default = "default_page_size")]
    pub default_size: u64,
    /// Hard cap on the requested page size.
    #[serde(default = "default_max_page_size")]
    pub max_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_size: default_page_size(),
            max_size: default_max_page_size(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default tracing filter, overridden by `RUST_LOG`.
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

/// Load configuration from a YAML file.
///
/// # Errors
///
/// Returns error if the file cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or("config.yaml");
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_string(),
        source,
    })?;
    let config = serde_yaml_bw::from_str(&content)?;
    Ok(config)
}

const fn default_page_size() -> u64 {
    20
}

const fn default_max_page_size() -> u64 {
    100
}

fn default_log_filter() -> String {
    "info".to_string()
}
