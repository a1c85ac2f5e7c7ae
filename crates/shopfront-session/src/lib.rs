//! # shopfront-session: The Cart Session Service
//!
//! The single surface the presentation layer calls into. One
//! [`CartSession`] is constructed per process, rehydrated from local
//! storage, and every cart, saved-list and coupon operation flows
//! through it.
//!
//! ## Module Organization
//! ```text
//! shopfront_session/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── session.rs      ◄─── CartSession service + SessionHandle
//! ├── catalog.rs      ◄─── Fixed sample product catalog
//! ├── view.rs         ◄─── CartView/CartTotals DTOs for the frontend
//! └── bin/demo.rs     ◄─── Scripted walkthrough binary
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use shopfront_session::{CartSession, sample_products};
//! use shopfront_storage::{LocalStore, StoreConfig};
//!
//! # let tmp = tempfile::tempdir().unwrap();
//! let store = LocalStore::open(StoreConfig::new(tmp.path()))?;
//! let mut session = CartSession::open(store);
//!
//! let product = &sample_products()[0];
//! session.add_to_cart(product);
//! assert_eq!(session.item_count(&product.id), 1);
//!
//! let quote = session.quote();
//! assert_eq!(quote.subtotal, product.price());
//! # Ok::<(), shopfront_storage::StorageError>(())
//! ```

pub mod catalog;
pub mod session;
pub mod view;

pub use catalog::sample_products;
pub use session::{CartSession, SessionHandle, CART_RECORD, SAVED_ITEMS_RECORD};
pub use view::{free_shipping_progress, CartTotals, CartView};
