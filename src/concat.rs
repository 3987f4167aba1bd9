//! Pattern 3: Generic Sequence Concatenation
//!
//! Concatenates any number of sequences of a single element type into one
//! new sequence, preserving order within and across inputs.

/// Flattens `sequences` into a single vector: all elements of the first
/// sequence, then all elements of the second, and so on. Zero input
/// sequences yields an empty vector.
pub fn concat_all<T>(sequences: impl IntoIterator<Item = Vec<T>>) -> Vec<T> {
    sequences.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_numbers() {
        let result = concat_all([vec![1, 2], vec![3], vec![4, 5, 6]]);
        assert_eq!(result, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_concat_strings() {
        let result = concat_all([
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string()],
        ]);
        assert_eq!(result, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_length_is_sum_of_input_lengths() {
        let a = vec![1, 2, 3];
        let b = vec![4];
        let c = vec![5, 6];
        let expected_len = a.len() + b.len() + c.len();
        assert_eq!(concat_all([a, b, c]).len(), expected_len);
    }

    #[test]
    fn test_zero_sequences_yields_empty() {
        let result: Vec<i32> = concat_all(Vec::<Vec<i32>>::new());
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_sequences_are_skipped() {
        let result = concat_all([vec![], vec![1], vec![], vec![2]]);
        assert_eq!(result, vec![1, 2]);
    }
}
