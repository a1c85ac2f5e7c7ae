//! # Cart Session
//!
//! The process-wide cart session: one owned service instance, constructed
//! once with explicit rehydration, exposing every cart and coupon
//! operation to UI callers.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Operation Flow                               │
//! │                                                                         │
//! │  UI Event                 Session                    Persistence        │
//! │  ────────                 ───────                    ───────────        │
//! │                                                                         │
//! │  Click "Add" ───────────► add_to_cart(product)  ───► save cart.json     │
//! │                                                                         │
//! │  "Save for later" ──────► save_for_later(p) ────────► save both records │
//! │                                                                         │
//! │  Enter coupon code ─────► apply_coupon(code) ───────► (memory only)     │
//! │                                                                         │
//! │  Render order summary ──► quote() ──────────────────► (pure read)       │
//! │                                                                         │
//! │  Every mutating operation re-serializes the affected record. A          │
//! │  failed write is logged and otherwise ignored: the in-memory state      │
//! │  stays authoritative for the rest of the session.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Coupon Lifecycle
//! The active coupon is applied against the subtotal at apply time and is
//! never revalidated afterwards: removing items (or clearing the cart)
//! leaves it in place even if the subtotal drops below the coupon's
//! minimum. Only `remove_coupon` clears it. It is not persisted; a new
//! session starts couponless.

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use shopfront_core::{
    pricing, Cart, Coupon, CouponCatalog, CouponResult, LineItem, Money, Product, Quote,
    SavedItems,
};
use shopfront_storage::{LocalStore, StorageError, StoreConfig};

/// Record key for the serialized cart line items.
pub const CART_RECORD: &str = "cart";

/// Record key for the serialized saved-for-later snapshots.
pub const SAVED_ITEMS_RECORD: &str = "saved_items";

// =============================================================================
// Cart Session
// =============================================================================

/// The cart session service.
///
/// Owns the line-item store, the saved-for-later list, the coupon catalog
/// and the active coupon, plus the storage handle it persists into.
#[derive(Debug)]
pub struct CartSession {
    cart: Cart,
    saved: SavedItems,
    catalog: CouponCatalog,
    active_coupon: Option<Coupon>,
    store: LocalStore,
}

impl CartSession {
    /// Opens a session over the given store, rehydrating the cart and
    /// saved list from their persisted records.
    ///
    /// Missing or corrupt records fail soft to empty lists inside the
    /// store, so opening never fails once the store exists.
    pub fn open(store: LocalStore) -> Self {
        let cart = Cart::from_items(store.load::<Vec<LineItem>>(CART_RECORD));
        let saved = SavedItems::from_items(store.load::<Vec<Product>>(SAVED_ITEMS_RECORD));

        debug!(
            cart_items = cart.item_count(),
            saved_items = saved.len(),
            "cart session rehydrated"
        );

        CartSession {
            cart,
            saved,
            catalog: CouponCatalog::standard(),
            active_coupon: None,
            store,
        }
    }

    /// Opens a session backed by the platform app-data directory.
    pub fn open_default() -> Result<Self, StorageError> {
        let store = LocalStore::open(StoreConfig::default_dir()?)?;
        Ok(CartSession::open(store))
    }

    // =========================================================================
    // Cart Mutations
    // =========================================================================

    /// Adds one unit of a product to the cart and persists.
    pub fn add_to_cart(&mut self, product: &Product) {
        debug!(product_id = %product.id, "add_to_cart");
        self.cart.add(product);
        self.persist_cart();
    }

    /// Removes a line item and persists. No-op (still persisted) if the
    /// product is not in the cart.
    pub fn remove_from_cart(&mut self, product_id: &str) {
        debug!(product_id, "remove_from_cart");
        self.cart.remove(product_id);
        self.persist_cart();
    }

    /// Replaces a line item's quantity and persists. `quantity <= 0`
    /// behaves as removal.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        debug!(product_id, quantity, "update_quantity");
        self.cart.set_quantity(product_id, quantity);
        self.persist_cart();
    }

    /// Moves a product from the cart onto the saved-for-later list.
    ///
    /// Fire-and-forget on both sides: saving an already-saved product is
    /// deduplicated, and it is fine if no matching cart line exists.
    pub fn save_for_later(&mut self, product: &Product) {
        debug!(product_id = %product.id, "save_for_later");
        self.saved.add(product);
        self.cart.remove(&product.id);
        self.persist_saved();
        self.persist_cart();
    }

    /// Moves a saved product back into the cart (quantity accumulates as
    /// a normal add).
    pub fn move_to_cart(&mut self, product: &Product) {
        debug!(product_id = %product.id, "move_to_cart");
        self.cart.add(product);
        self.saved.remove(&product.id);
        self.persist_cart();
        self.persist_saved();
    }

    /// Removes a product from the saved list unconditionally and persists.
    pub fn remove_saved_item(&mut self, product_id: &str) {
        debug!(product_id, "remove_saved_item");
        self.saved.remove(product_id);
        self.persist_saved();
    }

    /// Empties the cart line items and persists. Saved items and the
    /// active coupon are untouched; clearing the coupon is a separate,
    /// caller-initiated action.
    pub fn clear_cart(&mut self) {
        debug!("clear_cart");
        self.cart.clear();
        self.persist_cart();
    }

    // =========================================================================
    // Coupons
    // =========================================================================

    /// Checks whether a code could be applied to the current subtotal,
    /// without changing any state.
    pub fn validate_coupon(&self, code: &str) -> CouponResult<&Coupon> {
        self.catalog.validate(code, self.cart.subtotal())
    }

    /// Validates a code against the current subtotal and, on success,
    /// makes it the active coupon (replacing any previous one).
    ///
    /// On failure the error carries the user-facing reason and the
    /// previously active coupon is left unchanged.
    pub fn apply_coupon(&mut self, code: &str) -> CouponResult<Coupon> {
        let coupon = self.catalog.validate(code, self.cart.subtotal())?.clone();
        debug!(code = %coupon.code, "apply_coupon");
        self.active_coupon = Some(coupon.clone());
        Ok(coupon)
    }

    /// Clears the active coupon unconditionally. Never fails.
    pub fn remove_coupon(&mut self) {
        debug!("remove_coupon");
        self.active_coupon = None;
    }

    /// The currently applied coupon, if any.
    pub fn active_coupon(&self) -> Option<&Coupon> {
        self.active_coupon.as_ref()
    }

    /// The fixed promotional catalog, for display.
    pub fn coupon_catalog(&self) -> &CouponCatalog {
        &self.catalog
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// The cart's line items.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The saved-for-later list.
    pub fn saved_items(&self) -> &SavedItems {
        &self.saved
    }

    /// Cart subtotal: Σ price × quantity.
    pub fn cart_total(&self) -> Money {
        self.cart.subtotal()
    }

    /// Total quantity across all line items (for the cart badge).
    pub fn cart_count(&self) -> i64 {
        self.cart.total_quantity()
    }

    /// Quantity of one product in the cart, or 0.
    pub fn item_count(&self, product_id: &str) -> i64 {
        self.cart.quantity_of(product_id)
    }

    /// Full price breakdown for the current cart and active coupon.
    /// Recomputed on every call; nothing here is cached.
    pub fn quote(&self) -> Quote {
        pricing::quote(&self.cart, self.active_coupon.as_ref())
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    fn persist_cart(&self) {
        if let Err(err) = self.store.save(CART_RECORD, self.cart.items()) {
            warn!(%err, "cart persistence degraded, continuing on in-memory state");
        }
    }

    fn persist_saved(&self) {
        if let Err(err) = self.store.save(SAVED_ITEMS_RECORD, self.saved.items()) {
            warn!(%err, "saved-items persistence degraded, continuing on in-memory state");
        }
    }
}

// =============================================================================
// Session Handle
// =============================================================================

/// Shared handle to the session for UI event callbacks.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<CartSession>>`:
/// - `Arc`: shared ownership across callback registrations
/// - `Mutex`: one callback mutates the session at a time, which is also
///   the ordering guarantee the engine promises (operations are atomic
///   with respect to each other)
///
/// ## Why Not RwLock?
/// Session operations are quick and most of them mutate state. An RwLock
/// would add complexity with minimal benefit.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    inner: Arc<Mutex<CartSession>>,
}

impl SessionHandle {
    /// Wraps a session for shared use.
    pub fn new(session: CartSession) -> Self {
        SessionHandle {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Executes a closure with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = handle.with(|s| s.quote());
    /// ```
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartSession) -> R,
    {
        let session = self.inner.lock().expect("session mutex poisoned");
        f(&session)
    }

    /// Executes a closure with write access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// handle.with_mut(|s| s.add_to_cart(&product));
    /// ```
    pub fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CartSession) -> R,
    {
        let mut session = self.inner.lock().expect("session mutex poisoned");
        f(&mut session)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
