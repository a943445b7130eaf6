//! Orderings over [`SimilarityScore`] used to rank candidates
//!
//! Only the score takes part in the comparison; keys are ignored, so equal
//! scores compare `Equal` and a stable sort keeps their input order.

use crate::score::SimilarityScore;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Lowest score first.
///
/// Incomparable (NaN) scores compare `Equal`.
pub fn ascending(x: &SimilarityScore, y: &SimilarityScore) -> Ordering {
    x.score()
        .partial_cmp(&y.score())
        .unwrap_or(Ordering::Equal)
}

/// Highest score first.
pub fn descending(x: &SimilarityScore, y: &SimilarityScore) -> Ordering {
    ascending(y, x)
}

/// Named ranking direction, for configuration and `find_top_with_order`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreOrder {
    Ascending,
    #[default]
    Descending,
}

impl ScoreOrder {
    pub fn compare(&self, x: &SimilarityScore, y: &SimilarityScore) -> Ordering {
        match self {
            ScoreOrder::Ascending => ascending(x, y),
            ScoreOrder::Descending => descending(x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_score_first_greater() {
        let first = SimilarityScore::new("First", 0.87);
        let second = SimilarityScore::new("Second", 0.54);
        assert_eq!(ascending(&first, &second), Ordering::Greater);
        assert_eq!(ascending(&second, &first), Ordering::Less);
    }

    #[test]
    fn test_compare_score_second_greater() {
        let first = SimilarityScore::new("First", 0.37);
        let second = SimilarityScore::new("Second", 0.65);
        assert_eq!(ascending(&first, &second), Ordering::Less);
        assert_eq!(ascending(&second, &first), Ordering::Greater);
    }

    #[test]
    fn test_compare_score_equality_ignores_key() {
        let first = SimilarityScore::new("First", 0.96);
        let second = SimilarityScore::new("Second", 0.96);
        assert_eq!(ascending(&first, &second), Ordering::Equal);
        assert_eq!(descending(&second, &first), Ordering::Equal);
    }

    #[test]
    fn test_descending_is_reverse_of_ascending() {
        let low = SimilarityScore::new("low", 0.1);
        let high = SimilarityScore::new("high", 0.9);
        assert_eq!(descending(&low, &high), Ordering::Greater);
        assert_eq!(descending(&high, &low), Ordering::Less);
    }

    #[test]
    fn test_nan_compares_equal() {
        let nan = SimilarityScore::new("nan", f64::NAN);
        let one = SimilarityScore::new("one", 1.0);
        assert_eq!(ascending(&nan, &one), Ordering::Equal);
    }

    #[test]
    fn test_score_order() {
        let low = SimilarityScore::new("low", 0.1);
        let high = SimilarityScore::new("high", 0.9);
        assert_eq!(ScoreOrder::Ascending.compare(&low, &high), Ordering::Less);
        assert_eq!(ScoreOrder::Descending.compare(&low, &high), Ordering::Greater);
        assert_eq!(ScoreOrder::default(), ScoreOrder::Descending);
    }

    #[test]
    fn test_score_order_serde() {
        let order: ScoreOrder = serde_json::from_str("\"ascending\"").unwrap();
        assert_eq!(order, ScoreOrder::Ascending);
    }
}
