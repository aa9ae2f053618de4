//! Backend selection from a configuration tag.

use crate::error::{StoreError, StoreResult};
use crate::repositories::{AddressBookRepository, FilesystemRepository, InMemoryRepository};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;

/// Which storage backend to construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendConfig {
    /// Process-local map, no persistence.
    Memory,
    /// One file per entry inside `store_dir`.
    Fs { store_dir: PathBuf },
}

impl BackendConfig {
    /// Parse the configuration surface: a single-key mapping, either
    /// `{"memory": null}` or `{"fs": "<directory-path>"}`.
    pub fn from_value(value: &Value) -> StoreResult<Self> {
        let object = value.as_object().ok_or_else(|| {
            StoreError::Configuration("backend configuration must be a single-key object".into())
        })?;

        if object.len() != 1 {
            return Err(StoreError::Configuration(
                "backend configuration must have exactly one key".into(),
            ));
        }

        let (tag, params) = object.iter().next().ok_or_else(|| {
            StoreError::Configuration("backend configuration must have exactly one key".into())
        })?;
        match tag.as_str() {
            "memory" => Ok(BackendConfig::Memory),
            "fs" => match params.as_str() {
                Some(path) => Ok(BackendConfig::Fs {
                    store_dir: PathBuf::from(path),
                }),
                None => Err(StoreError::Configuration(
                    "fs backend requires a directory path".into(),
                )),
            },
            other => Err(StoreError::Configuration(format!(
                "unknown backend type: {}",
                other
            ))),
        }
    }
}

/// Construct the backend selected by `config`. A pure mapping with no state.
pub fn create_repository(config: &BackendConfig) -> StoreResult<Arc<dyn AddressBookRepository>> {
    match config {
        BackendConfig::Memory => Ok(Arc::new(InMemoryRepository::new())),
        BackendConfig::Fs { store_dir } => Ok(Arc::new(FilesystemRepository::new(store_dir)?)),
    }
}
