//! Pattern 6: Maximum-By-Price Scan
//! Example: Single-pass scan with a first-wins tie-break
//!
//! Run with: cargo run --bin p6_price_scan

use fundamentals_patterns::price_scan::{most_expensive, PricedItem};

fn main() {
    println!("=== Maximum-By-Price Scan ===\n");

    let cart = vec![
        PricedItem::new("Pen", 2.0),
        PricedItem::new("Laptop", 999.0),
        PricedItem::new("Monitor", 999.0), // Same price, scanned later
        PricedItem::new("Mug", 8.0),
    ];

    match most_expensive(&cart) {
        Some(item) => println!("Most expensive: {} at {}", item.name, item.price),
        None => println!("Cart is empty"),
    }

    // An empty cart is absence, not an error.
    match most_expensive(&[]) {
        Some(item) => println!("Most expensive: {} at {}", item.name, item.price),
        None => println!("Empty cart: no result"),
    }
}
