//! Filesystem repository backend: one JSON file per entry.

use crate::error::{StoreError, StoreResult};
use crate::models::AddressEntry;
use crate::repositories::traits::{generate_nickname, AddressBookRepository};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// File suffix for stored entries.
const ENTRY_FILE_EXT: &str = ".json";

/// Repository that persists each entry as `<nickname>.json` inside a store
/// directory, containing the entry's document form as UTF-8 JSON with no
/// envelope or metadata.
///
/// The store directory is shared external state: multiple instances or
/// processes pointed at the same directory may race at the check-then-act
/// boundary of "check existence, then write". Two concurrent `create` calls
/// with the same nickname can both observe "absent" and both write, last
/// writer wins. This is an accepted limitation of the single-node backend;
/// no cross-process locking is attempted.
#[derive(Debug)]
pub struct FilesystemRepository {
    store_dir: PathBuf,
}

impl FilesystemRepository {
    /// Open (or create) the store directory and validate it eagerly.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Configuration`] when the resolved path exists
    /// but is not a writable directory, for example when it is a regular
    /// file.
    pub fn new(store_dir_path: impl AsRef<Path>) -> StoreResult<Self> {
        let store_dir = store_dir_path.as_ref().to_path_buf();

        if !store_dir.exists() {
            std::fs::create_dir_all(&store_dir).map_err(|e| {
                StoreError::Configuration(format!(
                    "cannot create store directory {}: {}",
                    store_dir.display(),
                    e
                ))
            })?;
        }

        let metadata = std::fs::metadata(&store_dir).map_err(|e| {
            StoreError::Configuration(format!(
                "cannot inspect store directory {}: {}",
                store_dir.display(),
                e
            ))
        })?;
        if !metadata.is_dir() {
            return Err(StoreError::Configuration(format!(
                "store path {} is not a directory",
                store_dir.display()
            )));
        }

        // Mode bits alone miss ownership (a root-owned 0755 directory looks
        // writable to everyone), so probe with an actual write.
        let probe = store_dir.join(format!(".write-probe-{}", uuid::Uuid::new_v4().simple()));
        std::fs::write(&probe, b"").map_err(|e| {
            StoreError::Configuration(format!(
                "store path {} is not a writable directory: {}",
                store_dir.display(),
                e
            ))
        })?;
        let _ = std::fs::remove_file(&probe);

        Ok(Self { store_dir })
    }

    /// Path of the store directory.
    pub fn store_dir(&self) -> &Path {
        &self.store_dir
    }

    fn entry_path(&self, nickname: &str) -> PathBuf {
        self.store_dir.join(format!("{}{}", nickname, ENTRY_FILE_EXT))
    }

    async fn entry_exists(&self, nickname: &str) -> StoreResult<bool> {
        Ok(fs::try_exists(self.entry_path(nickname)).await?)
    }

    async fn read_entry_file(&self, nickname: &str) -> StoreResult<AddressEntry> {
        let bytes = match fs::read(self.entry_path(nickname)).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound(nickname.to_string()))
            }
            Err(e) => return Err(e.into()),
        };

        let doc = serde_json::from_slice(&bytes)?;
        AddressEntry::from_document(doc)
    }

    async fn write_entry_file(&self, nickname: &str, entry: &AddressEntry) -> StoreResult<()> {
        let doc = entry.to_document()?;
        let bytes = serde_json::to_vec(&doc)?;
        fs::write(self.entry_path(nickname), bytes).await?;
        Ok(())
    }
}

#[async_trait]
impl AddressBookRepository for FilesystemRepository {
    async fn create(&self, entry: AddressEntry, nickname: Option<String>) -> StoreResult<String> {
        let nickname = nickname.unwrap_or_else(generate_nickname);

        // Existence check and write are not atomic against concurrent
        // callers targeting the same nickname, see the type-level docs.
        if self.entry_exists(&nickname).await? {
            return Err(StoreError::AlreadyExists(nickname));
        }

        self.write_entry_file(&nickname, &entry).await?;
        debug!(nickname = %nickname, "created entry file");
        Ok(nickname)
    }

    async fn read(&self, nickname: &str) -> StoreResult<AddressEntry> {
        self.read_entry_file(nickname).await
    }

    async fn update(&self, nickname: &str, entry: AddressEntry) -> StoreResult<()> {
        if !self.entry_exists(nickname).await? {
            return Err(StoreError::NotFound(nickname.to_string()));
        }

        self.write_entry_file(nickname, &entry).await
    }

    async fn delete(&self, nickname: &str) -> StoreResult<()> {
        match fs::remove_file(self.entry_path(nickname)).await {
            Ok(()) => {
                debug!(nickname = %nickname, "deleted entry file");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(StoreError::NotFound(nickname.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Enumerate the store directory, parsing every file with the entry
    /// suffix. A file matching the suffix whose content fails to parse or
    /// validate aborts the whole enumeration, matching single-record read
    /// semantics.
    async fn read_all(&self) -> StoreResult<Vec<(String, AddressEntry)>> {
        let mut dir = fs::read_dir(&self.store_dir).await?;
        let mut entries = Vec::new();

        while let Some(item) = dir.next_entry().await? {
            let file_name = item.file_name();
            let file_name = file_name.to_string_lossy();
            if let Some(nickname) = file_name.strip_suffix(ENTRY_FILE_EXT) {
                let entry = self.read_entry_file(nickname).await?;
                entries.push((nickname.to_string(), entry));
            }
        }

        Ok(entries)
    }
}
