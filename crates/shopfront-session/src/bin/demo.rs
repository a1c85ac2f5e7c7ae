//! # Demo Walkthrough
//!
//! Scripted cart session exercising the engine end to end against the
//! real app-data store.
//!
//! ## Usage
//! ```bash
//! cargo run -p shopfront-session --bin demo
//!
//! # With operation-level logging
//! RUST_LOG=debug cargo run -p shopfront-session --bin demo
//! ```
//!
//! The walkthrough rehydrates whatever a previous run persisted, adds a
//! few products, applies a coupon and prints the resulting order summary.

use tracing::info;
use tracing_subscriber::EnvFilter;

use shopfront_session::{sample_products, CartSession, CartView};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut session = match CartSession::open_default() {
        Ok(session) => session,
        Err(err) => {
            eprintln!("could not open cart storage: {err}");
            std::process::exit(1);
        }
    };

    info!(
        rehydrated_items = session.cart().item_count(),
        "session opened"
    );

    let products = sample_products();
    let mouse = products.iter().find(|p| p.id == "wireless-mouse").unwrap();
    let lamp = products.iter().find(|p| p.id == "desk-lamp").unwrap();

    session.clear_cart();
    session.add_to_cart(mouse);
    session.add_to_cart(mouse);
    session.add_to_cart(lamp);

    match session.apply_coupon("save10") {
        Ok(coupon) => info!(code = %coupon.code, "coupon applied"),
        Err(err) => info!(%err, "coupon rejected"),
    }

    let quote = session.quote();
    println!("Order summary");
    println!("  Subtotal  {}", quote.subtotal);
    println!("  Discount -{}", quote.discount);
    println!("  Shipping  {}", quote.shipping);
    println!("  Tax       {}", quote.tax);
    println!("  Total     {}", quote.total);

    let view = CartView::from(&session);
    println!(
        "\nFull view:\n{}",
        serde_json::to_string_pretty(&view).expect("view serializes")
    );
}
