//! # Domain Types
//!
//! Core domain types used throughout the Shopfront cart engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌──────────────────────────┐               │
//! │  │    Product      │        │        LineItem          │               │
//! │  │  ─────────────  │ snap-  │  ──────────────────────  │               │
//! │  │  id             │ shot   │  product (frozen copy)   │               │
//! │  │  name           │ ─────► │  quantity (≥ 1)          │               │
//! │  │  category       │        │  added_at                │               │
//! │  │  price_cents    │        └──────────────────────────┘               │
//! │  │  stock/rating/  │                                                   │
//! │  │  sales          │        Saved-for-later entries are bare           │
//! │  └─────────────────┘        Product snapshots (see cart::SavedItems)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! The cart never re-reads the product catalog. A `LineItem` embeds a full
//! copy of the product taken at add time, so the cart keeps displaying
//! consistent data (and a frozen price) even if the catalog changes
//! underneath it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product from the catalog.
///
/// Read-only to this crate: the engine receives products from the
/// external catalog collaborator and only ever copies them into line
/// items or the saved-for-later list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier assigned by the catalog.
    pub id: String,

    /// Display name shown in the cart and order summary.
    pub name: String,

    /// Category used by browse/filter screens.
    pub category: String,

    /// Short marketing description.
    pub description: String,

    /// Image reference (URL); the engine never dereferences it.
    pub image: String,

    /// Unit price in cents (smallest currency unit). Never negative.
    pub price_cents: i64,

    /// Units currently in stock.
    pub stock: i64,

    /// Average customer rating (display only).
    pub rating: f64,

    /// Lifetime units sold (display only).
    pub sales: i64,
}

impl Product {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One product entry in the cart.
///
/// ## Design Notes
/// - `product`: frozen copy of the product at time of adding. Serialized
///   flattened, so the persisted record carries the product fields plus
///   `quantity` and `addedAt` at the top level.
/// - `quantity`: always ≥ 1 in a live cart; dropping to zero removes the
///   item instead (enforced by [`crate::cart::Cart`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    /// Product snapshot at time of adding (frozen, price included).
    #[serde(flatten)]
    pub product: Product,

    /// Quantity in cart.
    pub quantity: i64,

    /// When this item was first added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Creates a new line item from a product, with quantity 1.
    ///
    /// ## Price Freezing
    /// The whole product is captured at this moment. If the catalog price
    /// changes afterwards, this line item retains the original.
    pub fn from_product(product: &Product) -> Self {
        LineItem {
            product: product.clone(),
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Product identifier this line is keyed on.
    #[inline]
    pub fn product_id(&self) -> &str {
        &self.product.id
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.product.price() * self.quantity
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
