//! Pattern 2: Rating Filter
//!
//! An order-preserving filter over titled, rated records. Items at or
//! above the threshold survive; the input is never mutated.

/// Minimum rating an item needs to pass the filter.
pub const RATING_THRESHOLD: f64 = 4.0;

#[derive(Debug, Clone, PartialEq)]
pub struct RatedItem {
    pub title: String,
    pub rating: f64,
}

impl RatedItem {
    pub fn new(title: impl Into<String>, rating: f64) -> Self {
        RatedItem {
            title: title.into(),
            rating,
        }
    }
}

/// Returns the items whose rating is at least [`RATING_THRESHOLD`],
/// in their original relative order.
pub fn filter_by_rating(items: &[RatedItem]) -> Vec<&RatedItem> {
    items
        .iter()
        .filter(|item| item.rating >= RATING_THRESHOLD)
        .collect()
}
