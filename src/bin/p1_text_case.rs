//! Pattern 1: Text Case Transformer
//! Example: Optional flag controlling case
//!
//! Run with: cargo run --bin p1_text_case

use fundamentals_patterns::text_case::transform_case;

fn main() {
    // Usage: only an explicit false selects lowercase.
    println!("=== Text Case Transformer ===\n");

    let text = "Hello, Rust!";
    println!("input:        {}", text);
    println!("flag omitted: {}", transform_case(text, None));
    println!("flag true:    {}", transform_case(text, Some(true)));
    println!("flag false:   {}", transform_case(text, Some(false)));
}
