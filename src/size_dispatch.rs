//! Pattern 5: Sum Type Dispatch
//!
//! A closed two-variant union: text or number, nothing else. The match is
//! exhaustive, so any other shape is impossible rather than undefined.

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(i64),
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Value::Number(number)
    }
}

/// Character count for text, double for numbers.
pub fn dispatch(value: &Value) -> i64 {
    match value {
        Value::Text(text) => text.chars().count() as i64,
        Value::Number(number) => number * 2,
    }
}
