//! # shopfront-core: Pure Business Logic for the Shopfront Cart Engine
//!
//! This crate is the **heart** of the Shopfront storefront. It contains the
//! cart pricing engine as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Shopfront Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Presentation Layer (external)                  │   │
//! │  │    Product Grid ──► Cart UI ──► Coupon Field ──► Order Summary  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  shopfront-session                              │   │
//! │  │    add_to_cart, apply_coupon, quote, save_for_later, ...        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ shopfront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  coupon   │   │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  Catalog  │   │   │
//! │  │   │ LineItem  │  │  TaxRate  │  │SavedItems │  │ validate  │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                        ┌───────────┐                            │   │
//! │  │                        │  pricing  │                            │   │
//! │  │                        │   Quote   │                            │   │
//! │  │                        └───────────┘                            │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              shopfront-storage (Persistence Layer)              │   │
//! │  │           JSON records: cart.json, saved_items.json             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, LineItem)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Line-item store and saved-for-later list
//! - [`coupon`] - Fixed coupon catalog and eligibility validation
//! - [`pricing`] - Subtotal, discount, shipping, tax, total derivation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every derivation is deterministic - same input = same output
//! 2. **No I/O**: Persistence and rendering live in other crates
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: Coupon failures are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use shopfront_core::{Cart, CouponCatalog, Money, pricing};
//!
//! let cart = Cart::new();
//! let catalog = CouponCatalog::standard();
//!
//! // SAVE10 has no minimum order; even an empty cart qualifies
//! let coupon = catalog.validate("save10", cart.subtotal()).unwrap();
//!
//! let quote = pricing::quote(&cart, Some(coupon));
//! assert_eq!(quote.subtotal, Money::zero());
//! assert_eq!(quote.discount, Money::zero());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod coupon;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shopfront_core::Money` instead of
// `use shopfront_core::money::Money`

pub use cart::{Cart, SavedItems};
pub use coupon::{Coupon, CouponCatalog, DiscountRule};
pub use error::{CouponError, CouponResult};
pub use money::{Money, TaxRate};
pub use pricing::Quote;
pub use types::{LineItem, Product};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Flat sales tax applied to the subtotal, in basis points (800 = 8%).
///
/// ## Why a constant?
/// The storefront charges one flat rate regardless of category or
/// destination. Per-region rates would move this into configuration.
pub const SALES_TAX_BPS: u32 = 800;

/// Subtotal at or above which shipping is free ($100.00).
pub const FREE_SHIPPING_THRESHOLD_CENTS: i64 = 10_000;

/// Subtotal at or above which the reduced shipping rate applies ($50.00).
pub const REDUCED_SHIPPING_THRESHOLD_CENTS: i64 = 5_000;

/// Reduced flat shipping rate ($5.00).
pub const REDUCED_SHIPPING_CENTS: i64 = 500;

/// Standard flat shipping rate ($10.00).
pub const STANDARD_SHIPPING_CENTS: i64 = 1_000;
