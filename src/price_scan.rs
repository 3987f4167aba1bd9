//! Pattern 6: Maximum-By-Price Scan
//!
//! A single left-to-right pass that keeps the strictly greatest price.
//! Ties go to the earlier item, and an empty input is `None`, not an error.

#[derive(Debug, Clone, PartialEq)]
pub struct PricedItem {
    pub name: String,
    pub price: f64,
}

impl PricedItem {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        PricedItem {
            name: name.into(),
            price,
        }
    }
}

/// Returns the first item with the greatest price, or `None` for an
/// empty slice. O(n) time, O(1) extra space.
pub fn most_expensive(items: &[PricedItem]) -> Option<&PricedItem> {
    let mut best: Option<&PricedItem> = None;
    for item in items {
        // Strict > keeps the earlier item on equal prices.
        if best.map_or(true, |current| item.price > current.price) {
            best = Some(item);
        }
    }
    best
}
