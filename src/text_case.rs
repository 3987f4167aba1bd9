//! Pattern 1: Text Case Transformer
//!
//! A pure function with an optional flag: only an explicit `Some(false)`
//! selects lowercase; `Some(true)` and `None` both select uppercase.

/// Transforms `text` to lowercase when `uppercase` is explicitly
/// `Some(false)`, and to uppercase in every other case.
pub fn transform_case(text: &str, uppercase: Option<bool>) -> String {
    match uppercase {
        Some(false) => text.to_lowercase(),
        Some(true) | None => text.to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_false_lowercases() {
        assert_eq!(transform_case("Hello World", Some(false)), "hello world");
    }

    #[test]
    fn test_explicit_true_uppercases() {
        assert_eq!(transform_case("Hello World", Some(true)), "HELLO WORLD");
    }

    #[test]
    fn test_omitted_flag_uppercases() {
        assert_eq!(transform_case("Hello World", None), "HELLO WORLD");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(transform_case("", None), "");
        assert_eq!(transform_case("", Some(false)), "");
    }
}
