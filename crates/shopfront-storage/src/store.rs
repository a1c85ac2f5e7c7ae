//! # Local Store
//!
//! File-backed key-value store holding the session's persisted records.
//!
//! ## Read/Write Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    LocalStore Contract                                  │
//! │                                                                         │
//! │  load(key)                          save(key, value)                    │
//! │  ─────────                          ────────────────                    │
//! │  file missing   → Default::default  serialize + write <key>.json        │
//! │  file unreadable→ warn! + Default   synchronous, no fsync, no           │
//! │  corrupt JSON   → warn! + Default   rollback; caller treats failure     │
//! │  valid JSON     → T                 as degraded persistence             │
//! │                                                                         │
//! │  Absence of a record is NOT an error: a first-run session simply        │
//! │  starts with empty lists. A corrupt record must never crash the         │
//! │  session either, so deserialization failures also fail soft.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::StorageError;

// =============================================================================
// Configuration
// =============================================================================

/// Storage configuration: where the record files live.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    dir: PathBuf,
}

impl StoreConfig {
    /// Configuration rooted at an explicit directory (tests, portable
    /// installs).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        StoreConfig { dir: dir.into() }
    }

    /// Configuration rooted at the platform app-data directory.
    ///
    /// - Linux: `~/.local/share/shopfront`
    /// - macOS: `~/Library/Application Support/com.shopfront.shopfront`
    /// - Windows: `%APPDATA%\shopfront\shopfront\data`
    pub fn default_dir() -> Result<Self, StorageError> {
        let dirs = ProjectDirs::from("com", "shopfront", "shopfront")
            .ok_or(StorageError::NoDataDir)?;
        Ok(StoreConfig::new(dirs.data_dir()))
    }

    /// The configured storage directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

// =============================================================================
// Local Store
// =============================================================================

/// File-per-record JSON store.
#[derive(Debug)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Opens the store, creating the storage directory if needed.
    ///
    /// This is the only read path that can fail hard: without a writable
    /// directory there is nothing to degrade to.
    pub fn open(config: StoreConfig) -> Result<Self, StorageError> {
        fs::create_dir_all(&config.dir).map_err(|source| StorageError::Io {
            key: config.dir.display().to_string(),
            source,
        })?;

        debug!(dir = %config.dir.display(), "local store opened");
        Ok(LocalStore { dir: config.dir })
    }

    /// Loads a record, failing soft to `T::default()`.
    ///
    /// ## Behavior
    /// - Missing file: first run or never-saved record → default
    /// - Unreadable file or corrupt JSON: logged and discarded → default
    pub fn load<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        let path = self.record_path(key);

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(key, "no persisted record, starting empty");
                return T::default();
            }
            Err(err) => {
                warn!(key, %err, "could not read persisted record, starting empty");
                return T::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, %err, "corrupt persisted record, starting empty");
                T::default()
            }
        }
    }

    /// Saves a record synchronously.
    ///
    /// Errors are returned for the caller to log; the session treats a
    /// failed write as degraded persistence and keeps running on its
    /// in-memory state.
    pub fn save<T>(&self, key: &str, value: &T) -> Result<(), StorageError>
    where
        T: Serialize + ?Sized,
    {
        let json = serde_json::to_vec_pretty(value).map_err(|source| StorageError::Serialize {
            key: key.to_string(),
            source,
        })?;

        fs::write(self.record_path(key), json).map_err(|source| StorageError::Io {
            key: key.to_string(),
            source,
        })?;

        debug!(key, "record persisted");
        Ok(())
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
