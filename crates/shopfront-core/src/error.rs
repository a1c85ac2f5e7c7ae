//! # Error Types
//!
//! Domain-specific error types for shopfront-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopfront-core errors (this file)                                      │
//! │  └── CouponError      - Coupon validation failures                      │
//! │                                                                         │
//! │  shopfront-storage errors (separate crate)                              │
//! │  └── StorageError     - Persistence failures (absorbed by the           │
//! │                         session as logged degradation)                  │
//! │                                                                         │
//! │  Flow: CouponError → session → user-visible message. Never fatal:       │
//! │  a rejected coupon leaves cart and active coupon untouched.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the minimum-order threshold)
//! 3. Errors are enum variants, never String
//! 4. Each variant maps directly to a user-facing message

use thiserror::Error;

use crate::money::Money;

/// Coupon validation errors.
///
/// The cart engine's error taxonomy is deliberately narrow: these are
/// UI-state rejections, not I/O failures. Both are surfaced to the user
/// as a message and never abort the session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CouponError {
    /// The code does not match any catalog entry.
    #[error("Invalid coupon code")]
    InvalidCoupon,

    /// The code is valid but the cart subtotal is below the coupon's
    /// minimum order threshold. The message states the threshold.
    #[error("Minimum order of {min_order} required")]
    MinimumOrderNotMet { min_order: Money },
}

/// Convenience type alias for coupon validation results.
pub type CouponResult<T> = Result<T, CouponError>;

// =============================================================================
// Unit Tests
// =============================================================================
