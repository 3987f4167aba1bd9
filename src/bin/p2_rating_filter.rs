//! Pattern 2: Rating Filter
//! Example: Order-preserving filter over rated records
//!
//! Run with: cargo run --bin p2_rating_filter

use fundamentals_patterns::rating_filter::{filter_by_rating, RatedItem, RATING_THRESHOLD};

fn main() {
    println!("=== Rating Filter (threshold {}) ===\n", RATING_THRESHOLD);

    let movies = vec![
        RatedItem::new("Inception", 4.8),
        RatedItem::new("Gigli", 2.1),
        RatedItem::new("Arrival", 4.0),
        RatedItem::new("Cats", 2.8),
        RatedItem::new("Spirited Away", 4.9),
    ];

    for movie in &movies {
        println!("  {} ({})", movie.title, movie.rating);
    }

    println!("\n=== Kept ===");
    for movie in filter_by_rating(&movies) {
        println!("  {} ({})", movie.title, movie.rating);
    }
}
