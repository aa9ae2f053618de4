//! In-memory repository backend.

use crate::error::{StoreError, StoreResult};
use crate::models::AddressEntry;
use crate::repositories::traits::{generate_nickname, AddressBookRepository};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Repository backed by a process-local map, scoped to the instance's
/// lifetime. Nothing persists across process restarts.
///
/// Operations involve no real I/O, but acquiring the async lock gives them
/// the same suspension points as the other backends, so callers awaiting the
/// trait stay backend-agnostic. `read_all` snapshots the map under the read
/// lock; entries present both before and after a concurrent mutation are
/// always observed.
pub struct InMemoryRepository {
    entries: RwLock<HashMap<String, AddressEntry>>,
}

impl InMemoryRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AddressBookRepository for InMemoryRepository {
    async fn create(&self, entry: AddressEntry, nickname: Option<String>) -> StoreResult<String> {
        let nickname = nickname.unwrap_or_else(generate_nickname);

        let mut entries = self.entries.write().await;
        if entries.contains_key(&nickname) {
            return Err(StoreError::AlreadyExists(nickname));
        }

        entries.insert(nickname.clone(), entry);
        Ok(nickname)
    }

    async fn read(&self, nickname: &str) -> StoreResult<AddressEntry> {
        let entries = self.entries.read().await;
        entries
            .get(nickname)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(nickname.to_string()))
    }

    async fn update(&self, nickname: &str, entry: AddressEntry) -> StoreResult<()> {
        let mut entries = self.entries.write().await;
        match entries.get_mut(nickname) {
            Some(stored) => {
                *stored = entry;
                Ok(())
            }
            None => Err(StoreError::NotFound(nickname.to_string())),
        }
    }

    async fn delete(&self, nickname: &str) -> StoreResult<()> {
        let mut entries = self.entries.write().await;
        match entries.remove(nickname) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(nickname.to_string())),
        }
    }

    async fn read_all(&self) -> StoreResult<Vec<(String, AddressEntry)>> {
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .map(|(nickname, entry)| (nickname.clone(), entry.clone()))
            .collect())
    }
}
