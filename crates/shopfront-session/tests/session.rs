//! Integration tests for the cart session: persistence round trips,
//! rehydration, and the full pricing flow over real (temp-dir) storage.

use shopfront_core::{CouponError, Money, Product};
use shopfront_session::{CartSession, CART_RECORD, SAVED_ITEMS_RECORD};
use shopfront_storage::{LocalStore, StoreConfig};

fn product(id: &str, price_cents: i64) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {}", id),
        category: "Electronics".to_string(),
        description: String::new(),
        image: String::new(),
        price_cents,
        stock: 25,
        rating: 4.5,
        sales: 100,
    }
}

fn session_at(dir: &std::path::Path) -> CartSession {
    let store = LocalStore::open(StoreConfig::new(dir)).unwrap();
    CartSession::open(store)
}

#[test]
fn repeated_adds_accumulate_quantity_and_total() {
    let tmp = tempfile::tempdir().unwrap();
    let mut session = session_at(tmp.path());
    let p = product("a", 1_250);

    for _ in 0..5 {
        session.add_to_cart(&p);
    }

    assert_eq!(session.item_count("a"), 5);
    assert_eq!(session.cart_total().cents(), 6_250);
}

#[test]
fn cart_survives_session_restart() {
    let tmp = tempfile::tempdir().unwrap();
    let p = product("a", 1_999);

    {
        let mut session = session_at(tmp.path());
        session.add_to_cart(&p);
        session.add_to_cart(&p);
    }

    // a brand-new session over the same directory sees the same cart
    let session = session_at(tmp.path());
    assert_eq!(session.item_count("a"), 2);
    assert_eq!(session.cart_total().cents(), 3_998);
    // ...but not the coupon, which is never persisted
    assert!(session.active_coupon().is_none());
}

#[test]
fn update_quantity_zero_removes_from_persisted_record() {
    let tmp = tempfile::tempdir().unwrap();
    let mut session = session_at(tmp.path());
    let p = product("a", 1_000);

    session.add_to_cart(&p);
    session.update_quantity("a", 0);

    assert_eq!(session.item_count("a"), 0);
    assert!(session.cart().get("a").is_none());

    // the persisted record agrees: empty list on disk
    let raw = std::fs::read_to_string(tmp.path().join(format!("{CART_RECORD}.json"))).unwrap();
    let records: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert!(records.is_empty());
}

#[test]
fn update_quantity_replaces_rather_than_accumulates() {
    let tmp = tempfile::tempdir().unwrap();
    let mut session = session_at(tmp.path());
    let p = product("a", 1_000);

    session.add_to_cart(&p);
    session.update_quantity("a", 4);
    session.update_quantity("a", 2);

    assert_eq!(session.item_count("a"), 2);
}

#[test]
fn save_for_later_then_move_back_round_trips() {
    let tmp = tempfile::tempdir().unwrap();
    let mut session = session_at(tmp.path());
    let p = product("a", 2_500);

    session.add_to_cart(&p);
    let before_total = session.cart_total();
    let before_count = session.cart_count();

    session.save_for_later(&p);
    assert_eq!(session.item_count("a"), 0);
    assert!(session.saved_items().contains("a"));

    session.move_to_cart(&p);
    assert_eq!(session.cart_total(), before_total);
    assert_eq!(session.cart_count(), before_count);
    assert!(!session.saved_items().contains("a"));
}

#[test]
fn save_for_later_without_cart_entry_is_fine() {
    let tmp = tempfile::tempdir().unwrap();
    let mut session = session_at(tmp.path());
    let p = product("a", 2_500);

    // never added to the cart; saving still works (fire-and-forget)
    session.save_for_later(&p);
    assert!(session.saved_items().contains("a"));
    assert!(session.cart().is_empty());
}

#[test]
fn saved_items_survive_restart_and_removal_persists() {
    let tmp = tempfile::tempdir().unwrap();
    let p = product("a", 2_500);

    {
        let mut session = session_at(tmp.path());
        session.save_for_later(&p);
    }

    let mut session = session_at(tmp.path());
    assert!(session.saved_items().contains("a"));

    session.remove_saved_item("a");
    let raw =
        std::fs::read_to_string(tmp.path().join(format!("{SAVED_ITEMS_RECORD}.json"))).unwrap();
    let records: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert!(records.is_empty());
}

#[test]
fn coupon_round_trip_on_fifty_dollar_cart() {
    let tmp = tempfile::tempdir().unwrap();
    let mut session = session_at(tmp.path());
    session.add_to_cart(&product("a", 5_000)); // subtotal $50.00

    // SAVE10 applies and takes 10% off
    let coupon = session.apply_coupon("SAVE10").unwrap();
    assert_eq!(coupon.code, "SAVE10");
    assert_eq!(session.quote().discount.cents(), 500);

    // SAVE20 needs $100 and is rejected with the threshold in the message
    let err = session.apply_coupon("SAVE20").unwrap_err();
    assert_eq!(
        err,
        CouponError::MinimumOrderNotMet {
            min_order: Money::from_cents(10_000)
        }
    );
    assert_eq!(err.to_string(), "Minimum order of $100.00 required");

    // the rejection left SAVE10 active
    assert_eq!(session.active_coupon().unwrap().code, "SAVE10");
}

#[test]
fn unknown_code_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let mut session = session_at(tmp.path());

    let err = session.apply_coupon("NOPE").unwrap_err();
    assert_eq!(err, CouponError::InvalidCoupon);
    assert!(session.active_coupon().is_none());
}

#[test]
fn freeship_waives_shipping_on_small_cart_after_qualifying() {
    let tmp = tempfile::tempdir().unwrap();
    let mut session = session_at(tmp.path());
    session.add_to_cart(&product("a", 6_000)); // qualifies for FREESHIP ($50 min)
    session.apply_coupon("freeship").unwrap();

    // shrink the cart below the threshold; the coupon is deliberately
    // not revalidated and keeps waiving shipping
    session.update_quantity("a", 1);
    session.remove_from_cart("a");
    session.add_to_cart(&product("b", 1_000)); // subtotal $10

    let quote = session.quote();
    assert_eq!(quote.shipping.cents(), 0);
    assert_eq!(session.active_coupon().unwrap().code, "FREESHIP");
}

#[test]
fn end_to_end_welcome15_quote() {
    let tmp = tempfile::tempdir().unwrap();
    let mut session = session_at(tmp.path());
    session.add_to_cart(&product("a", 8_000)); // one $80 item

    session.apply_coupon("WELCOME15").unwrap();
    let quote = session.quote();

    assert_eq!(quote.subtotal.cents(), 8_000);
    assert_eq!(quote.discount.cents(), 1_200); // 15%
    assert_eq!(quote.shipping.cents(), 500); // ≥ $50, < $100
    assert_eq!(quote.tax.cents(), 640); // 8% of subtotal
    assert_eq!(quote.total.cents(), 7_940); // $79.40
}

#[test]
fn corrupt_cart_record_opens_as_empty_session() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join(format!("{CART_RECORD}.json")), "][ nope").unwrap();

    let mut session = session_at(tmp.path());
    assert!(session.cart().is_empty());

    // and the session remains fully usable
    session.add_to_cart(&product("a", 1_000));
    assert_eq!(session.cart_count(), 1);
}
