//! # shopfront-storage: Local Persistence for the Shopfront Cart Session
//!
//! This crate provides the local key-value store the cart session
//! persists into: one JSON file per logical record.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Shopfront Data Flow                                │
//! │                                                                         │
//! │  Session operation (add_to_cart, save_for_later, ...)                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 shopfront-storage (THIS CRATE)                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐              ┌───────────────┐              │   │
//! │  │   │  StoreConfig  │              │  LocalStore   │              │   │
//! │  │   │  (store.rs)   │─────────────►│  (store.rs)   │              │   │
//! │  │   │               │              │               │              │   │
//! │  │   │ directory     │              │ load: soft    │              │   │
//! │  │   │ resolution    │              │ save: best-   │              │   │
//! │  │   │               │              │       effort  │              │   │
//! │  │   └───────────────┘              └───────────────┘              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │   <data_dir>/cart.json, <data_dir>/saved_items.json             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - `StoreConfig` and the `LocalStore` record store
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust
//! use shopfront_storage::{LocalStore, StoreConfig};
//!
//! # let tmp = tempfile::tempdir().unwrap();
//! let store = LocalStore::open(StoreConfig::new(tmp.path()))?;
//!
//! store.save("cart", &vec!["record"])?;
//! let records: Vec<String> = store.load("cart");
//! assert_eq!(records, vec!["record"]);
//! # Ok::<(), shopfront_storage::StorageError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::StorageError;
pub use store::{LocalStore, StoreConfig};
