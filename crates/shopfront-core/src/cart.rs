//! # Line-Item Store
//!
//! The cart's unique-by-product-id line-item list and the separate
//! saved-for-later list.
//!
//! ## Operation Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  UI Event                 Operation                Effect               │
//! │  ────────                 ─────────                ──────               │
//! │                                                                         │
//! │  Click "Add to cart" ───► add(product) ──────────► qty += 1 or insert  │
//! │                                                                         │
//! │  Change quantity ───────► set_quantity(id, n) ───► qty = n (n ≤ 0      │
//! │                                                     removes the line)   │
//! │                                                                         │
//! │  Click remove ──────────► remove(id) ────────────► line gone (no-op    │
//! │                                                     if absent)          │
//! │                                                                         │
//! │  Click "Clear cart" ────► clear() ───────────────► cart empty; saved   │
//! │                                                     list untouched      │
//! │                                                                         │
//! │  "Save for later" and "move to cart" span both lists and live on the   │
//! │  session, which owns one Cart and one SavedItems.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Items are unique by product id (adding the same product again
//!   increments its quantity)
//! - Quantity is always ≥ 1; setting it to zero or below removes the line
//! - Removal of an absent id is a silent no-op, never an error

use crate::money::Money;
use crate::types::{LineItem, Product};

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an ordered list of line items, unique by product id.
///
/// Persistence serializes the line-item list itself (see
/// [`Cart::items`]), not this wrapper, so the store only ever holds a
/// plain JSON array.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Rebuilds a cart from persisted line items.
    ///
    /// Trusts the records as stored; defensive filtering of corrupt
    /// records happens in the storage layer, not here.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        Cart { items }
    }

    /// Adds one unit of a product to the cart.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity increases by 1
    /// - Product not in cart: inserted with quantity 1 and a fresh
    ///   added-at timestamp
    ///
    /// Accumulation is unbounded and never fails.
    pub fn add(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += 1;
            return;
        }

        self.items.push(LineItem::from_product(product));
    }

    /// Removes a line item by product id. Silent no-op if absent.
    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|i| i.product.id != product_id);
    }

    /// Sets the quantity of a line item, replacing the current value.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: behaves exactly like [`Cart::remove`]
    /// - Product not in cart: silent no-op (the caller's quantity input
    ///   raced with a removal; nothing sensible to do)
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Clears all line items. Saved items and coupon state are owned
    /// elsewhere and deliberately untouched.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the line item for a product, if present.
    pub fn get(&self, product_id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }

    /// Quantity of one product in the cart, or 0 if absent.
    pub fn quantity_of(&self, product_id: &str) -> i64 {
        self.get(product_id).map_or(0, |i| i.quantity)
    }

    /// Number of distinct products in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total quantity across all line items (a cart with 2× A and 3× B
    /// counts 5, not 2).
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Subtotal: Σ unit price × quantity over all line items.
    pub fn subtotal(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |acc, i| acc + i.line_total())
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All line items, in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }
}

// =============================================================================
// Saved Items
// =============================================================================

/// The saved-for-later list: bare product snapshots, unique by id, with
/// no quantity semantics (saving always implies leaving the cart).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavedItems {
    items: Vec<Product>,
}

impl SavedItems {
    /// Creates a new empty saved list.
    pub fn new() -> Self {
        SavedItems { items: Vec::new() }
    }

    /// Rebuilds the saved list from persisted snapshots.
    pub fn from_items(items: Vec<Product>) -> Self {
        SavedItems { items }
    }

    /// Appends a product snapshot unless one with the same id is already
    /// saved (dedup by id; the earlier snapshot wins).
    pub fn add(&mut self, product: &Product) {
        if !self.contains(&product.id) {
            self.items.push(product.clone());
        }
    }

    /// Removes a saved product by id. Silent no-op if absent.
    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|p| p.id != product_id);
    }

    /// Checks whether a product id is on the saved list.
    pub fn contains(&self, product_id: &str) -> bool {
        self.items.iter().any(|p| p.id == product_id)
    }

    /// Number of saved products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the saved list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All saved snapshots, in insertion order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            category: "Electronics".to_string(),
            description: String::new(),
            image: String::new(),
            price_cents,
            stock: 10,
            rating: 4.0,
            sales: 0,
        }
    }

    #[test]
    fn test_add_inserts_with_quantity_one() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 999));

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.quantity_of("1"), 1);
        assert_eq!(cart.subtotal().cents(), 999);
    }

    #[test]
    fn test_add_same_product_accumulates() {
        let mut cart = Cart::new();
        let product = test_product("1", 999);

        for _ in 0..4 {
            cart.add(&product);
        }

        assert_eq!(cart.item_count(), 1); // still one unique item
        assert_eq!(cart.quantity_of("1"), 4);
        assert_eq!(cart.subtotal().cents(), 999 * 4);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 999));
        cart.remove("nope");

        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_set_quantity_replaces() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 999));
        cart.add(&test_product("1", 999));

        cart.set_quantity("1", 7);
        assert_eq!(cart.quantity_of("1"), 7); // replaced, not accumulated
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 999));

        cart.set_quantity("1", 0);
        assert_eq!(cart.quantity_of("1"), 0);
        assert!(cart.get("1").is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_negative_removes() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 999));

        cart.set_quantity("1", -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_missing_is_noop() {
        let mut cart = Cart::new();
        cart.set_quantity("ghost", 5);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_quantity_sums_lines() {
        let mut cart = Cart::new();
        let a = test_product("a", 100);
        let b = test_product("b", 200);

        cart.add(&a);
        cart.add(&a);
        cart.add(&b);

        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.subtotal().cents(), 400);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 999));
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.subtotal().cents(), 0);
    }

    #[test]
    fn test_saved_items_dedup() {
        let mut saved = SavedItems::new();
        let product = test_product("1", 999);

        saved.add(&product);
        saved.add(&product);

        assert_eq!(saved.len(), 1);
        assert!(saved.contains("1"));
    }

    #[test]
    fn test_saved_items_remove() {
        let mut saved = SavedItems::new();
        saved.add(&test_product("1", 999));
        saved.remove("1");
        saved.remove("1"); // second removal is a no-op

        assert!(saved.is_empty());
    }
}
