//! # CLI Configuration
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults.
//!
//! ## Environment Variables
//! - `SHOPFRONT_STORE_NAME`: Title shown above the menu (default "Best Buy")
//! - `SHOPFRONT_CATALOG`: Path to a JSON catalog (default: built-in demo catalog)
//! - `SHOPFRONT_LOG`: Default log filter when `RUST_LOG` is unset

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Default log filter: quiet, except for the shopfront crates.
pub const DEFAULT_LOG_FILTER: &str = "warn,shopfront_core=info,shopfront_cli=info";

/// Shopfront CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Store name (menu title)
    pub store_name: String,

    /// Catalog file to load instead of the demo catalog
    pub catalog_path: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            store_name: "Best Buy".to_string(),
            catalog_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        CliConfig::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = CliConfig::default();

        if let Some(store_name) = lookup("SHOPFRONT_STORE_NAME") {
            if store_name.trim().is_empty() {
                return Err(ConfigError::InvalidValue("SHOPFRONT_STORE_NAME".to_string()));
            }
            config.store_name = store_name;
        }

        if let Some(path) = lookup("SHOPFRONT_CATALOG") {
            if path.trim().is_empty() {
                return Err(ConfigError::InvalidValue("SHOPFRONT_CATALOG".to_string()));
            }
            config.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(filter) = lookup("SHOPFRONT_LOG") {
            EnvFilter::try_new(&filter)
                .map_err(|_| ConfigError::InvalidValue("SHOPFRONT_LOG".to_string()))?;
            config.log_filter = filter;
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.store_name, "Best Buy");
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig::from_lookup(lookup_from(&[
            ("SHOPFRONT_STORE_NAME", "Corner Shop"),
            ("SHOPFRONT_CATALOG", "/tmp/catalog.json"),
            ("SHOPFRONT_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.store_name, "Corner Shop");
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.json")));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_invalid_values() {
        let err = CliConfig::from_lookup(lookup_from(&[("SHOPFRONT_STORE_NAME", "  ")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for SHOPFRONT_STORE_NAME");

        assert!(CliConfig::from_lookup(lookup_from(&[("SHOPFRONT_CATALOG", "")])).is_err());
        assert!(CliConfig::from_lookup(lookup_from(&[("SHOPFRONT_LOG", "shopfront=verbose")])).is_err());
    }
}
