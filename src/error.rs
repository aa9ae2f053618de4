//! Error types for the address book service.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when storing or retrieving address book entries.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Input document failed schema or required-field checks
    #[error("validation failed: {0}")]
    Validation(String),

    /// No entry is stored under the given nickname
    #[error("no entry exists for nickname: {0}")]
    NotFound(String),

    /// An entry is already stored under the given nickname
    #[error("an entry already exists for nickname: {0}")]
    AlreadyExists(String),

    /// Backend construction was given invalid parameters
    #[error("invalid backend configuration: {0}")]
    Configuration(String),

    /// Underlying storage medium fault
    #[error("storage I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// Stored bytes are not a valid JSON document
    #[error("stored entry is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
