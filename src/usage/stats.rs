//! Integer statistics over resource counts
//!
//! All arithmetic is integer: averages truncate toward zero. An average of an
//! empty sequence is undefined, so averaging goes through [`NonEmptyCounts`];
//! the free functions report [`TfeError::EmptyInput`] instead of inventing a
//! value.

use crate::error::{Result, TfeError};

/// A sequence of counts known to hold at least one value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonEmptyCounts<'a>(&'a [u32]);

impl<'a> NonEmptyCounts<'a> {
    /// Returns `None` for an empty slice
    pub fn new(values: &'a [u32]) -> Option<Self> {
        if values.is_empty() {
            None
        } else {
            Some(Self(values))
        }
    }

    pub fn sum(&self) -> u64 {
        sum(self.0)
    }

    /// Truncating mean
    pub fn average(&self) -> u64 {
        self.sum() / self.0.len() as u64
    }
}

/// Sum of all values; 0 for an empty slice
pub fn sum(values: &[u32]) -> u64 {
    values.iter().map(|&v| u64::from(v)).sum()
}

/// Truncating mean of `values`
pub fn average(values: &[u32]) -> Result<u64> {
    NonEmptyCounts::new(values)
        .map(|counts| counts.average())
        .ok_or_else(|| TfeError::EmptyInput("average".to_string()))
}

/// The `n` largest values, or all of them when there are fewer than `n`
///
/// Values come back in ascending order.
pub fn top(values: &[u32], n: usize) -> Vec<u32> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let keep = n.min(sorted.len());
    sorted.split_off(sorted.len() - keep)
}

/// Truncating mean of the `n` largest values
pub fn top_average(values: &[u32], n: usize) -> Result<u64> {
    let largest = top(values, n);
    NonEmptyCounts::new(&largest)
        .map(|counts| counts.average())
        .ok_or_else(|| TfeError::EmptyInput(format!("top {} average", n)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sum_empty() {
        assert_eq!(sum(&[]), 0);
    }

    #[test]
    fn test_sum_values() {
        assert_eq!(sum(&[3, 4, 5]), 12);
        assert_eq!(sum(&[0, 0, 7]), 7);
    }

    #[test]
    fn test_sum_does_not_overflow_u32() {
        assert_eq!(sum(&[u32::MAX, u32::MAX]), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_average_equal_values() {
        assert_eq!(average(&[5, 5, 5]).unwrap(), 5);
    }

    #[test]
    fn test_average_truncates() {
        assert_eq!(average(&[1, 2]).unwrap(), 1);
        assert_eq!(average(&[0, 10, 20, 1]).unwrap(), 7);
    }

    #[test]
    fn test_average_empty_is_error() {
        match average(&[]) {
            Err(TfeError::EmptyInput(what)) => assert_eq!(what, "average"),
            other => panic!("Expected TfeError::EmptyInput, got {:?}", other),
        }
    }

    #[test]
    fn test_top_returns_largest() {
        let largest: HashSet<u32> = top(&[3, 1, 4, 1, 5, 9, 2, 6], 3).into_iter().collect();
        assert_eq!(largest, HashSet::from([9, 6, 5]));
    }

    #[test]
    fn test_top_clamps_to_length() {
        let mut all = top(&[4, 2, 8], 10);
        all.sort_unstable();
        assert_eq!(all, vec![2, 4, 8]);
        assert_eq!(top(&[4, 2, 8], 3).len(), 3);
    }

    #[test]
    fn test_top_keeps_duplicates() {
        assert_eq!(top(&[7, 7, 1, 7], 2), vec![7, 7]);
    }

    #[test]
    fn test_top_does_not_reorder_input() {
        let values = vec![3, 1, 2];
        let _ = top(&values, 2);
        assert_eq!(values, vec![3, 1, 2]);
    }

    #[test]
    fn test_top_zero_or_empty() {
        assert!(top(&[1, 2, 3], 0).is_empty());
        assert!(top(&[], 5).is_empty());
    }

    #[test]
    fn test_top_average() {
        assert_eq!(top_average(&[4, 4, 4, 4], 2).unwrap(), 4);
        assert_eq!(top_average(&[0, 10, 20], 10).unwrap(), 10);
        assert_eq!(top_average(&[1, 100, 50, 3], 2).unwrap(), 75);
    }

    #[test]
    fn test_top_average_empty_is_error() {
        assert!(matches!(top_average(&[], 10), Err(TfeError::EmptyInput(_))));
        assert!(matches!(
            top_average(&[1, 2], 0),
            Err(TfeError::EmptyInput(_))
        ));
    }

    #[test]
    fn test_non_empty_counts() {
        assert!(NonEmptyCounts::new(&[]).is_none());

        let values = [10, 20];
        let counts = NonEmptyCounts::new(&values).unwrap();
        assert_eq!(counts.sum(), 30);
        assert_eq!(counts.average(), 15);
    }
}
