use crate::error::StoreResult;
use crate::models::AddressEntry;
use async_trait::async_trait;

/// Repository for storing address book entries keyed by an opaque nickname.
///
/// Provides abstraction over entry storage and retrieval, enabling different
/// implementations (in-memory map, one file per entry). Nicknames are
/// compared by exact string equality and carry no meaning to the backend.
#[async_trait]
pub trait AddressBookRepository: Send + Sync {
    /// Acquire backend-wide resources. Must be called before any CRUD call.
    async fn start(&self) -> StoreResult<()> {
        Ok(())
    }

    /// Release backend-wide resources once the repository is permanently done.
    async fn stop(&self) -> StoreResult<()> {
        Ok(())
    }

    /// Store a new entry and return its nickname.
    ///
    /// When `nickname` is `None` a fresh random 128-bit identifier is
    /// generated, rendered as lowercase hex. Fails with
    /// [`StoreError::AlreadyExists`](crate::error::StoreError::AlreadyExists)
    /// when the nickname is already in use.
    async fn create(&self, entry: AddressEntry, nickname: Option<String>) -> StoreResult<String>;

    /// Retrieve the entry stored under `nickname`.
    async fn read(&self, nickname: &str) -> StoreResult<AddressEntry>;

    /// Fully replace the entry stored under `nickname`. No partial merge.
    async fn update(&self, nickname: &str, entry: AddressEntry) -> StoreResult<()>;

    /// Remove the entry stored under `nickname`, freeing the nickname for
    /// reuse by a future `create`.
    async fn delete(&self, nickname: &str) -> StoreResult<()>;

    /// Enumerate every currently stored `(nickname, entry)` pair.
    ///
    /// Returns a materialized snapshot rather than a lazy stream: each call
    /// re-enumerates current state in full. Order is unspecified and must
    /// not be relied on by callers.
    async fn read_all(&self) -> StoreResult<Vec<(String, AddressEntry)>>;
}

/// Generate a fresh nickname: a random 128-bit identifier as lowercase hex.
pub(crate) fn generate_nickname() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
