//! # Sample Product Catalog
//!
//! The fixed in-memory product list the storefront browses and the cart
//! snapshots from. The engine treats these records as read-only input: it
//! never mutates or re-fetches them.
//!
//! A real deployment would swap this module for a backing service; the
//! rest of the engine only ever sees `Product` values.

use shopfront_core::Product;

fn product(
    id: &str,
    name: &str,
    category: &str,
    price_cents: i64,
    stock: i64,
    rating: f64,
    sales: i64,
    description: &str,
    image: &str,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        price_cents,
        stock,
        rating,
        sales,
    }
}

/// The storefront's demo inventory.
///
/// Prices are in cents; categories match the browse filter set
/// (Electronics, Furniture, Stationery, Accessories).
pub fn sample_products() -> Vec<Product> {
    vec![
        product(
            "macbook-pro-16",
            "MacBook Pro 16\"",
            "Electronics",
            239_999,
            15,
            4.7,
            234,
            "Professional laptop with M2 chip, 16GB RAM, 512GB SSD",
            "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?w=800",
        ),
        product(
            "wireless-mouse",
            "Logitech MX Master 3",
            "Electronics",
            9_999,
            45,
            4.8,
            567,
            "Wireless ergonomic mouse with customizable buttons",
            "https://images.unsplash.com/photo-1527814050087-3793815479db?w=800",
        ),
        product(
            "mech-keyboard",
            "Mechanical Keyboard Pro",
            "Electronics",
            12_999,
            32,
            4.6,
            423,
            "RGB mechanical keyboard with Cherry MX switches",
            "https://images.unsplash.com/photo-1591799264318-7e6ef8ddb7ea?w=800",
        ),
        product(
            "office-chair",
            "Ergonomic Office Chair",
            "Furniture",
            34_999,
            8,
            4.5,
            145,
            "Adjustable office chair with lumbar support",
            "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=800",
        ),
        product(
            "desk-lamp",
            "LED Desk Lamp",
            "Furniture",
            4_999,
            23,
            4.3,
            289,
            "Touch-controlled LED lamp with adjustable brightness",
            "https://images.unsplash.com/photo-1507473885765-e6ed057f782c?w=800",
        ),
        product(
            "4k-monitor",
            "4K Ultra HD Monitor",
            "Electronics",
            49_999,
            12,
            4.8,
            678,
            "27-inch 4K monitor with HDR and 144Hz refresh rate",
            "https://images.unsplash.com/photo-1593640408182-31c70c8268f5?w=800",
        ),
        product(
            "leather-notebook",
            "Premium Leather Notebook",
            "Stationery",
            2_499,
            100,
            4.2,
            891,
            "Handcrafted leather-bound journal with 200 pages",
            "https://images.unsplash.com/photo-1516979187457-637abb4f9353?w=800",
        ),
        product(
            "fountain-pen-set",
            "Executive Fountain Pen Set",
            "Stationery",
            8_999,
            67,
            4.7,
            456,
            "Premium fountain pen set with ink refills",
            "https://images.unsplash.com/photo-1583484963886-cfe2bff2945f?w=800",
        ),
        product(
            "usb-c-hub",
            "USB-C Multi-Port Hub",
            "Electronics",
            3_999,
            89,
            4.4,
            723,
            "7-in-1 USB-C hub with HDMI, USB 3.0, and SD card slots",
            "https://images.unsplash.com/photo-1588702547919-26089e690ecc?w=800",
        ),
        product(
            "water-bottle",
            "Insulated Water Bottle",
            "Accessories",
            3_499,
            54,
            4.6,
            534,
            "Double-wall insulated bottle, keeps drinks cold for 24 hours",
            "https://images.unsplash.com/photo-1523362628745-0c100150b504?w=800",
        ),
        product(
            "laptop-backpack",
            "Laptop Backpack Pro",
            "Accessories",
            8_999,
            28,
            4.5,
            267,
            "Water-resistant backpack with laptop compartment",
            "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=800",
        ),
        product(
            "nc-headphones",
            "Noise Cancelling Headphones",
            "Electronics",
            29_999,
            19,
            4.9,
            845,
            "Wireless headphones with active noise cancellation",
            "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=800",
        ),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================
