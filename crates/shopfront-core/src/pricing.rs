//! # Pricing Calculator
//!
//! Pure, stateless derivation of order totals from (line items, active
//! coupon). No caching: every query recomputes from scratch, which is
//! cheap at cart scale and keeps the functions trivially correct.
//!
//! ## Composition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Order Total Composition                             │
//! │                                                                         │
//! │  line items ──► subtotal = Σ price × qty                                │
//! │                     │                                                   │
//! │        ┌────────────┼──────────────┬───────────────┐                    │
//! │        ▼            ▼              ▼               │                    │
//! │    discount      shipping         tax              │                    │
//! │    (coupon       ($0/$5/$10      (flat 8% of       │                    │
//! │     rule,         tiers, waived   subtotal,        │                    │
//! │     capped)       by coupon)      pre-discount)    │                    │
//! │        │            │              │               │                    │
//! │        └────────────┴──────────────┴───────────────┘                    │
//! │                     │                                                   │
//! │                     ▼                                                   │
//! │   total = max($0, subtotal + shipping + tax − discount)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tax is charged on the pre-discount subtotal and is not affected by
//! shipping. The zero floor on the total is a defensive invariant: the
//! fixed-discount cap already prevents a negative total, but the floor
//! holds even if the catalog ever changes.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::coupon::Coupon;
use crate::money::{Money, TaxRate};
use crate::{
    FREE_SHIPPING_THRESHOLD_CENTS, REDUCED_SHIPPING_CENTS, REDUCED_SHIPPING_THRESHOLD_CENTS,
    SALES_TAX_BPS, STANDARD_SHIPPING_CENTS,
};

// =============================================================================
// Quote
// =============================================================================

/// A full price breakdown for the current cart state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Quote {
    /// Σ unit price × quantity, before any adjustment.
    pub subtotal: Money,

    /// Amount off from the active coupon (0 without one).
    pub discount: Money,

    /// Shipping charge after tiering and coupon waiver.
    pub shipping: Money,

    /// Flat sales tax on the subtotal.
    pub tax: Money,

    /// Grand total, floored at zero.
    pub total: Money,
}

/// Derives the full quote for a cart and optional active coupon.
pub fn quote(cart: &Cart, coupon: Option<&Coupon>) -> Quote {
    let subtotal = cart.subtotal();
    let discount = discount_for(subtotal, coupon);
    let shipping = shipping_for(subtotal, coupon);
    let tax = tax_for(subtotal);
    let total = (subtotal + shipping + tax - discount).max(Money::zero());

    Quote {
        subtotal,
        discount,
        shipping,
        tax,
        total,
    }
}

/// Discount for a subtotal under the active coupon, if any.
///
/// Fixed-amount coupons are capped at the subtotal, so this term alone
/// can never drive the total negative.
pub fn discount_for(subtotal: Money, coupon: Option<&Coupon>) -> Money {
    coupon.map_or(Money::zero(), |c| c.rule.amount_off(subtotal))
}

/// Shipping charge for a subtotal.
///
/// ## Tiers
/// - Active coupon waives shipping, or subtotal ≥ $100 → free
/// - Subtotal ≥ $50 → $5.00
/// - Otherwise → $10.00
pub fn shipping_for(subtotal: Money, coupon: Option<&Coupon>) -> Money {
    let waived = coupon.is_some_and(|c| c.free_shipping);
    if waived || subtotal.cents() >= FREE_SHIPPING_THRESHOLD_CENTS {
        return Money::zero();
    }

    if subtotal.cents() >= REDUCED_SHIPPING_THRESHOLD_CENTS {
        Money::from_cents(REDUCED_SHIPPING_CENTS)
    } else {
        Money::from_cents(STANDARD_SHIPPING_CENTS)
    }
}

/// Flat 8% sales tax on the subtotal. Unaffected by discount or shipping.
pub fn tax_for(subtotal: Money) -> Money {
    subtotal.calculate_tax(TaxRate::from_bps(SALES_TAX_BPS))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coupon::CouponCatalog;
    use crate::types::Product;

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

    fn cart_with(price_cents: i64) -> Cart {
        let mut cart = Cart::new();
        cart.add(&test_product("1", price_cents));
        cart
    }

    fn coupon(code: &str) -> Coupon {
        CouponCatalog::standard().find(code).unwrap().clone()
    }

    #[test]
    fn test_shipping_tiers() {
        // $49.99 → $10 standard rate
        assert_eq!(
            shipping_for(Money::from_cents(4_999), None).cents(),
            1_000
        );
        // $50.00 → $5 reduced rate
        assert_eq!(shipping_for(Money::from_cents(5_000), None).cents(), 500);
        // $99.99 → still reduced
        assert_eq!(shipping_for(Money::from_cents(9_999), None).cents(), 500);
        // $100.00 → free
        assert_eq!(shipping_for(Money::from_cents(10_000), None).cents(), 0);
    }

    #[test]
    fn test_freeship_coupon_forces_free_shipping() {
        let freeship = coupon("FREESHIP");
        // even a $10 subtotal ships free with the coupon applied
        assert_eq!(
            shipping_for(Money::from_cents(1_000), Some(&freeship)).cents(),
            0
        );
    }

    #[test]
    fn test_discount_without_coupon_is_zero() {
        assert_eq!(discount_for(Money::from_cents(5_000), None).cents(), 0);
    }

    #[test]
    fn test_percentage_discount() {
        let save10 = coupon("SAVE10");
        // SAVE10 on a $50 subtotal takes off $5
        assert_eq!(
            discount_for(Money::from_cents(5_000), Some(&save10)).cents(),
            500
        );
    }

    #[test]
    fn test_fixed_discount_capped_at_subtotal() {
        let freeship = coupon("FREESHIP"); // fixed $10 off
        assert_eq!(
            discount_for(Money::from_cents(500), Some(&freeship)).cents(),
            500
        );
    }

    #[test]
    fn test_tax_is_eight_percent_of_subtotal() {
        assert_eq!(tax_for(Money::from_cents(8_000)).cents(), 640);
        assert_eq!(tax_for(Money::zero()).cents(), 0);
    }

    #[test]
    fn test_quote_empty_cart() {
        let q = quote(&Cart::new(), None);
        assert_eq!(q.subtotal.cents(), 0);
        assert_eq!(q.discount.cents(), 0);
        assert_eq!(q.tax.cents(), 0);
        // an empty cart still quotes the standard shipping rate; the UI
        // hides shipping until there is something to ship
        assert_eq!(q.shipping.cents(), 1_000);
        assert_eq!(q.total.cents(), 1_000);
    }

    #[test]
    fn test_quote_end_to_end_welcome15() {
        // One $80 item, WELCOME15 (min $30, 15% off):
        //   subtotal $80.00, discount $12.00, shipping $5.00 (≥$50, <$100),
        //   tax $6.40 (8% of $80), total $79.40
        let cart = cart_with(8_000);
        let welcome = coupon("WELCOME15");
        let q = quote(&cart, Some(&welcome));

        assert_eq!(q.subtotal.cents(), 8_000);
        assert_eq!(q.discount.cents(), 1_200);
        assert_eq!(q.shipping.cents(), 500);
        assert_eq!(q.tax.cents(), 640);
        assert_eq!(q.total.cents(), 7_940);
    }

    #[test]
    fn test_quote_total_never_negative() {
        // Pathological coupon: fixed $50 off a $1 cart. The cap keeps the
        // discount at $1 and the floor keeps the total at zero or above.
        let cart = cart_with(100);
        let big_fixed = Coupon {
            code: "BIGFIX".to_string(),
            rule: crate::coupon::DiscountRule::Fixed(Money::from_cents(5_000)),
            min_order: Money::zero(),
            free_shipping: true,
        };

        let q = quote(&cart, Some(&big_fixed));
        assert_eq!(q.discount.cents(), 100);
        assert!(q.total >= Money::zero());
    }
}
