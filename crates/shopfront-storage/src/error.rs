//! # Storage Error Types
//!
//! Error types for persistence operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StorageError (this module) ← adds the record key for context           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartSession ← logs a warning and carries on; in-memory state           │
//! │                stays authoritative (degraded persistence, not fatal)    │
//! │                                                                         │
//! │  Reads never surface here at all: a missing or corrupt record           │
//! │  fails soft to an empty list inside LocalStore.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Persistence operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The storage directory could not be created or written.
    #[error("Storage I/O failed for '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be serialized.
    ///
    /// ## When This Occurs
    /// Practically never for the cart's plain data types; kept as a typed
    /// variant so the session can log it rather than panic.
    #[error("Could not serialize record '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// No platform app-data directory could be resolved.
    #[error("No application data directory available on this platform")]
    NoDataDir,
}
