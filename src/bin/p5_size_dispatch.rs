//! Pattern 5: Sum Type Dispatch
//! Example: A closed text-or-number union with exhaustive matching
//!
//! Run with: cargo run --bin p5_size_dispatch

use fundamentals_patterns::size_dispatch::{dispatch, Value};

fn main() {
    println!("=== Sum Type Dispatch ===\n");

    let inputs = vec![Value::from("hello"), Value::from(10), Value::from("héllo")];
    for input in &inputs {
        println!("{:?} -> {}", input, dispatch(input));
    }
}
