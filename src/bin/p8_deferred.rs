//! Pattern 8: Deferred Computation
//! Example: A timer-delayed squaring that settles exactly once
//!
//! Run with: cargo run --bin p8_deferred

use fundamentals_patterns::deferred::{deferred_square, spawn_deferred_square, SQUARE_DELAY};
use futures::future::join_all;

#[tokio::main]
async fn main() {
    println!("=== Deferred Squaring (delay {:?}) ===\n", SQUARE_DELAY);

    match deferred_square(5).await {
        Ok(squared) => println!("5 squared: {}", squared),
        Err(e) => println!("error: {}", e),
    }

    match deferred_square(-3).await {
        Ok(squared) => println!("-3 squared: {}", squared),
        Err(e) => println!("-3 rejected: {}", e),
    }

    // Unbounded concurrent invocations, each with its own timer.
    println!("\n=== Concurrent invocations ===");
    let results = join_all([deferred_square(2), deferred_square(3), deferred_square(4)]).await;
    println!("results: {:?}", results);

    // Detached form through a one-shot channel.
    println!("\n=== Detached form ===");
    let rx = spawn_deferred_square(6);
    println!("6 squared (via channel): {:?}", rx.await.unwrap());
}
