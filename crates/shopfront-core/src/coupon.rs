//! # Coupon Catalog & Validator
//!
//! The fixed set of promotional codes and the eligibility check that
//! decides whether a code may be applied to a given subtotal.
//!
//! ## Validation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Coupon Validation                                    │
//! │                                                                         │
//! │  User types " save10 "                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  normalize: trim + uppercase → "SAVE10"                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  catalog lookup ──── no match ──► CouponError::InvalidCoupon            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  subtotal ≥ min_order? ── no ──► CouponError::MinimumOrderNotMet        │
//! │       │                          (message states the threshold)         │
//! │       ▼                                                                 │
//! │  Ok(&Coupon) ── session stores it as the active coupon                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Coupons are immutable and defined at process start; this engine has no
//! coupon create/edit surface.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CouponError, CouponResult};
use crate::money::Money;

// =============================================================================
// Discount Rule
// =============================================================================

/// How a coupon reduces the order: a percentage of the subtotal or a
/// fixed amount off.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", tag = "kind", content = "amount")]
#[ts(export)]
pub enum DiscountRule {
    /// Whole-number percentage of the subtotal (10 = 10% off).
    Percentage(u32),

    /// Fixed amount off, capped at the subtotal so the discount alone
    /// can never push the total negative.
    Fixed(Money),
}

impl DiscountRule {
    /// Amount taken off a given subtotal under this rule.
    pub fn amount_off(&self, subtotal: Money) -> Money {
        match *self {
            DiscountRule::Percentage(pct) => subtotal.percent_of(pct),
            DiscountRule::Fixed(amount) => amount.min(subtotal),
        }
    }
}

// =============================================================================
// Coupon
// =============================================================================

/// A named discount rule with an eligibility threshold, optionally
/// waiving shipping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Coupon {
    /// Unique code, stored uppercase; input is matched case-insensitively.
    pub code: String,

    /// How the discount is computed.
    pub rule: DiscountRule,

    /// Minimum cart subtotal required to apply this coupon.
    pub min_order: Money,

    /// Whether this coupon also waives the shipping charge entirely.
    pub free_shipping: bool,
}

impl Coupon {
    fn new(code: &str, rule: DiscountRule, min_order_cents: i64, free_shipping: bool) -> Self {
        Coupon {
            code: code.to_string(),
            rule,
            min_order: Money::from_cents(min_order_cents),
            free_shipping,
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The fixed promotional catalog, built once at startup.
#[derive(Debug, Clone)]
pub struct CouponCatalog {
    coupons: Vec<Coupon>,
}

impl CouponCatalog {
    /// The storefront's standard promotion set.
    ///
    /// | Code      | Rule            | Min order | Free shipping |
    /// |-----------|-----------------|-----------|---------------|
    /// | SAVE10    | 10% off         | $0        | no            |
    /// | SAVE20    | 20% off         | $100      | no            |
    /// | FREESHIP  | $10 off (fixed) | $50       | yes           |
    /// | WELCOME15 | 15% off         | $30       | no            |
    pub fn standard() -> Self {
        CouponCatalog {
            coupons: vec![
                Coupon::new("SAVE10", DiscountRule::Percentage(10), 0, false),
                Coupon::new("SAVE20", DiscountRule::Percentage(20), 10_000, false),
                Coupon::new(
                    "FREESHIP",
                    DiscountRule::Fixed(Money::from_cents(1_000)),
                    5_000,
                    true,
                ),
                Coupon::new("WELCOME15", DiscountRule::Percentage(15), 3_000, false),
            ],
        }
    }

    /// Looks up a coupon by normalized code.
    pub fn find(&self, code: &str) -> Option<&Coupon> {
        let code = normalize_code(code);
        self.coupons.iter().find(|c| c.code == code)
    }

    /// Validates a code against a cart subtotal.
    ///
    /// ## Errors
    /// - [`CouponError::InvalidCoupon`] when no catalog entry matches
    /// - [`CouponError::MinimumOrderNotMet`] when the subtotal is below
    ///   the coupon's threshold
    pub fn validate(&self, code: &str, subtotal: Money) -> CouponResult<&Coupon> {
        let coupon = self.find(code).ok_or(CouponError::InvalidCoupon)?;

        if subtotal < coupon.min_order {
            return Err(CouponError::MinimumOrderNotMet {
                min_order: coupon.min_order,
            });
        }

        Ok(coupon)
    }

    /// All coupons, for display on promotion banners.
    pub fn coupons(&self) -> &[Coupon] {
        &self.coupons
    }
}

impl Default for CouponCatalog {
    fn default() -> Self {
        CouponCatalog::standard()
    }
}

/// Trims and uppercases user input before lookup. Catalog codes are
/// ASCII, so `to_uppercase` cannot miss.
fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = CouponCatalog::standard();

        assert!(catalog.find("SAVE10").is_some());
        assert!(catalog.find("save10").is_some());
        assert!(catalog.find("  Save10  ").is_some());
        assert!(catalog.find("SAVE99").is_none());
    }

    #[test]
    fn test_validate_unknown_code() {
        let catalog = CouponCatalog::standard();
        let err = catalog
            .validate("BOGUS", Money::from_cents(10_000))
            .unwrap_err();
        assert_eq!(err, CouponError::InvalidCoupon);
    }

    #[test]
    fn test_validate_minimum_order() {
        let catalog = CouponCatalog::standard();

        // SAVE20 needs a $100 subtotal
        let err = catalog
            .validate("SAVE20", Money::from_cents(5_000))
            .unwrap_err();
        assert_eq!(
            err,
            CouponError::MinimumOrderNotMet {
                min_order: Money::from_cents(10_000)
            }
        );
        assert_eq!(err.to_string(), "Minimum order of $100.00 required");

        // Exactly at the threshold is eligible
        let coupon = catalog
            .validate("SAVE20", Money::from_cents(10_000))
            .unwrap();
        assert_eq!(coupon.code, "SAVE20");
    }

    #[test]
    fn test_validate_no_threshold() {
        let catalog = CouponCatalog::standard();
        // SAVE10 has no minimum; an empty cart qualifies
        assert!(catalog.validate("save10", Money::zero()).is_ok());
    }

    #[test]
    fn test_percentage_rule() {
        let rule = DiscountRule::Percentage(10);
        assert_eq!(rule.amount_off(Money::from_cents(5_000)).cents(), 500);
    }

    #[test]
    fn test_fixed_rule_is_capped_at_subtotal() {
        let rule = DiscountRule::Fixed(Money::from_cents(1_000));

        assert_eq!(rule.amount_off(Money::from_cents(5_000)).cents(), 1_000);
        // $10 off a $5 cart only discounts $5
        assert_eq!(rule.amount_off(Money::from_cents(500)).cents(), 500);
    }

    #[test]
    fn test_freeship_waives_shipping() {
        let catalog = CouponCatalog::standard();
        let coupon = catalog.find("FREESHIP").unwrap();

        assert!(coupon.free_shipping);
        assert_eq!(coupon.min_order.cents(), 5_000);
        assert_eq!(coupon.rule, DiscountRule::Fixed(Money::from_cents(1_000)));
    }
}
