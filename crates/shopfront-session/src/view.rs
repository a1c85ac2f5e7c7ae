//! # View DTOs
//!
//! Serializable snapshots of session state for the presentation layer.
//!
//! ## Order Summary Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart Page (rendered by the external presentation layer)               │
//! │                                                                        │
//! │  ┌──────────────────────────────────────────────────────────────┐      │
//! │  │  CART                                           3 items     │      │
//! │  ├──────────────────────────────────────────────────────────────┤      │
//! │  │  LED Desk Lamp            x2              $99.98            │      │
//! │  │  USB-C Multi-Port Hub     x1              $39.99            │      │
//! │  ├──────────────────────────────────────────────────────────────┤      │
//! │  │  Subtotal                                 $139.97           │      │
//! │  │  Shipping                                 FREE              │      │
//! │  │  Tax (8%)                                 $11.20            │      │
//! │  │  Discount (SAVE10)                       -$14.00            │      │
//! │  │  ─────────────────────────────────────────────────          │      │
//! │  │  TOTAL                                    $137.17           │      │
//! │  └──────────────────────────────────────────────────────────────┘      │
//! │                                                                        │
//! │  CartView::from(&session) → serialized as camelCase JSON               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use shopfront_core::{Coupon, LineItem, Money, Product, FREE_SHIPPING_THRESHOLD_CENTS};

use crate::session::CartSession;

/// Cart totals summary for the order-summary panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Distinct products in the cart.
    pub item_count: usize,
    /// Total quantity across all lines (cart badge number).
    pub total_quantity: i64,
    pub subtotal_cents: i64,
    pub discount_cents: i64,
    pub shipping_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
    /// Progress towards the free-shipping threshold, 0-100.
    pub free_shipping_progress: u32,
}

/// Full cart snapshot: line items, saved list, coupon state, totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<LineItem>,
    pub saved_items: Vec<Product>,
    pub active_coupon: Option<Coupon>,
    pub totals: CartTotals,
}

impl From<&CartSession> for CartTotals {
    fn from(session: &CartSession) -> Self {
        let quote = session.quote();
        CartTotals {
            item_count: session.cart().item_count(),
            total_quantity: session.cart_count(),
            subtotal_cents: quote.subtotal.cents(),
            discount_cents: quote.discount.cents(),
            shipping_cents: quote.shipping.cents(),
            tax_cents: quote.tax.cents(),
            total_cents: quote.total.cents(),
            free_shipping_progress: free_shipping_progress(quote.subtotal),
        }
    }
}

impl From<&CartSession> for CartView {
    fn from(session: &CartSession) -> Self {
        CartView {
            items: session.cart().items().to_vec(),
            saved_items: session.saved_items().items().to_vec(),
            active_coupon: session.active_coupon().cloned(),
            totals: CartTotals::from(session),
        }
    }
}

/// How far a subtotal is towards free shipping, as a 0-100 percentage
/// (the cart page's progress bar).
pub fn free_shipping_progress(subtotal: Money) -> u32 {
    let pct = subtotal.cents().max(0) * 100 / FREE_SHIPPING_THRESHOLD_CENTS;
    pct.min(100) as u32
}

// =============================================================================
// Unit Tests
// =============================================================================
