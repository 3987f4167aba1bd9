//! Pattern 3: Generic Sequence Concatenation
//! Example: Flattening any number of sequences of one element type
//!
//! Run with: cargo run --bin p3_concat

use fundamentals_patterns::concat::concat_all;

fn main() {
    println!("=== Sequence Concatenation ===\n");

    let numbers = concat_all([vec![1, 2], vec![3], vec![4, 5, 6]]);
    println!("numbers: {:?}", numbers);

    let words = concat_all([
        vec!["hello".to_string()],
        vec!["generic".to_string(), "world".to_string()],
    ]);
    println!("words:   {:?}", words);

    // Zero input sequences is just an empty result, not an error.
    let nothing: Vec<i32> = concat_all(Vec::<Vec<i32>>::new());
    println!("zero sequences: {:?}", nothing);
}
