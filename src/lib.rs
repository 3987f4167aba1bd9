//! # Core Language Fundamentals
//!
//! This crate provides runnable examples for a set of small, independent
//! utilities, each with a single input/output contract:
//!
//! ## Pattern 1: Text Case Transformer
//! - Optional flag controlling upper/lower case output
//!
//! ## Pattern 2: Rating Filter
//! - Order-preserving filter over titled/rated records
//!
//! ## Pattern 3: Generic Sequence Concatenation
//! - Flattening any number of sequences of one element type
//!
//! ## Pattern 4: Composition Over Inheritance
//! - A base entity plus a wrapping entity, behavioral subtyping via a trait
//!
//! ## Pattern 5: Sum Type Dispatch
//! - A closed two-variant union with exhaustive matching
//!
//! ## Pattern 6: Maximum-By-Price Scan
//! - Single-pass scan with a first-wins tie-break and `Option` for absence
//!
//! ## Pattern 7: Weekday Classifier
//! - A total function over a fixed seven-value enumeration
//!
//! ## Pattern 8: Deferred Computation
//! - A timer-delayed async computation that settles exactly once
//!
//! Run individual examples with:
//! ```bash
//! cargo run --bin p1_text_case
//! cargo run --bin p2_rating_filter
//! cargo run --bin p3_concat
//! cargo run --bin p4_vehicle
//! cargo run --bin p5_size_dispatch
//! cargo run --bin p6_price_scan
//! cargo run --bin p7_weekday
//! cargo run --bin p8_deferred
//! ```

pub mod concat;
pub mod deferred;
pub mod price_scan;
pub mod rating_filter;
pub mod size_dispatch;
pub mod text_case;
pub mod vehicle;
pub mod weekday;
