//! Pattern 7: Weekday Classifier
//! Example: A total function over a fixed seven-value enumeration
//!
//! Run with: cargo run --bin p7_weekday

use fundamentals_patterns::weekday::{classify, Weekday};

fn main() {
    println!("=== Weekday Classifier ===\n");

    for day in Weekday::ALL {
        println!("{:?}: {}", day, classify(day));
    }
}
