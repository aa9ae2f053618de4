//! Address book service layer.
//!
//! The only place where the data model and a storage backend meet: incoming
//! documents pass the schema gate, then the model-conversion gate, and only
//! then reach the backend. Backend failures propagate unchanged so the
//! boundary layer can map the specific kind to a transport status.

use crate::error::StoreResult;
use crate::models::AddressEntry;
use crate::repositories::{create_repository, AddressBookRepository, BackendConfig};
use crate::validation::{DocumentValidator, SchemaValidator};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Service wrapping a storage backend plus a document validator.
pub struct AddressBookService {
    repository: Arc<dyn AddressBookRepository>,
    validator: Arc<dyn DocumentValidator>,
}

impl std::fmt::Debug for AddressBookService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddressBookService").finish_non_exhaustive()
    }
}

impl AddressBookService {
    /// Create a service over an explicit backend and validator.
    pub fn new(
        repository: Arc<dyn AddressBookRepository>,
        validator: Arc<dyn DocumentValidator>,
    ) -> Self {
        Self {
            repository,
            validator,
        }
    }

    /// Create a service over the backend selected by `config`, validating
    /// against the bundled address book schema.
    pub fn from_config(config: &BackendConfig) -> StoreResult<Self> {
        let repository = create_repository(config)?;
        let validator = Arc::new(SchemaValidator::address_book()?);
        Ok(Self::new(repository, validator))
    }

    /// Start the underlying backend. Must be called before any CRUD call.
    pub async fn start(&self) -> StoreResult<()> {
        self.repository.start().await
    }

    /// Stop the underlying backend.
    pub async fn stop(&self) -> StoreResult<()> {
        self.repository.stop().await
    }

    /// Validate and store a new entry, returning its generated nickname.
    ///
    /// Schema validation and model conversion are two independent gates;
    /// the backend is never touched when either rejects the document.
    pub async fn create_address(&self, doc: Value) -> StoreResult<String> {
        self.validator.validate(&doc)?;
        let entry = AddressEntry::from_document(doc)?;

        let nickname = self.repository.create(entry, None).await?;
        debug!(nickname = %nickname, "created address entry");
        Ok(nickname)
    }

    /// Retrieve the entry stored under `nickname` in document form.
    pub async fn get_address(&self, nickname: &str) -> StoreResult<Value> {
        let entry = self.repository.read(nickname).await?;
        entry.to_document()
    }

    /// Validate and fully replace the entry stored under `nickname`.
    pub async fn update_address(&self, nickname: &str, doc: Value) -> StoreResult<()> {
        self.validator.validate(&doc)?;
        let entry = AddressEntry::from_document(doc)?;

        self.repository.update(nickname, entry).await?;
        debug!(nickname = %nickname, "updated address entry");
        Ok(())
    }

    /// Remove the entry stored under `nickname`.
    pub async fn delete_address(&self, nickname: &str) -> StoreResult<()> {
        self.repository.delete(nickname).await?;
        debug!(nickname = %nickname, "deleted address entry");
        Ok(())
    }

    /// Enumerate every stored `(nickname, document)` pair. Order is
    /// unspecified.
    pub async fn get_all_addresses(&self) -> StoreResult<Vec<(String, Value)>> {
        let entries = self.repository.read_all().await?;
        entries
            .into_iter()
            .map(|(nickname, entry)| Ok((nickname, entry.to_document()?)))
            .collect()
    }
}
