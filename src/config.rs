//! Configuration management for the address book service.
//!
//! This module handles loading and validating configuration from environment
//! variables.

use crate::error::{ConfigError, ConfigResult};
use crate::repositories::BackendConfig;
use std::env;
use std::path::PathBuf;

/// Configuration for the address book service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Which storage backend to construct
    pub backend: BackendConfig,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRBOOK_BACKEND`: `memory` or `fs` (default: `memory`)
    /// - `ADDRBOOK_STORE_DIR`: store directory, required when backend is `fs`
    /// - `LOG_LEVEL`: logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present; ignore when missing.
        let _ = dotenvy::dotenv();

        let backend_tag =
            env::var("ADDRBOOK_BACKEND").unwrap_or_else(|_| "memory".to_string());

        let backend = match backend_tag.as_str() {
            "memory" => BackendConfig::Memory,
            "fs" => {
                let store_dir = env::var("ADDRBOOK_STORE_DIR")
                    .map_err(|_| ConfigError::MissingVar("ADDRBOOK_STORE_DIR".to_string()))?;
                if store_dir.trim().is_empty() {
                    return Err(ConfigError::InvalidValue {
                        var: "ADDRBOOK_STORE_DIR".to_string(),
                        reason: "Cannot be empty".to_string(),
                    });
                }
                BackendConfig::Fs {
                    store_dir: PathBuf::from(store_dir),
                }
            }
            other => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRBOOK_BACKEND".to_string(),
                    reason: format!("Must be 'memory' or 'fs', got: {}", other),
                })
            }
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config { backend, log_level })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            backend: BackendConfig::Memory,
            log_level: "info".to_string(),
        }
    }
}
