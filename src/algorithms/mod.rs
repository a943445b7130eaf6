//! Core string similarity algorithms
//!
//! Each algorithm is implemented as a standalone function for composability,
//! plus a strategy type implementing [`SimilarityStrategy`] so callers can
//! swap algorithms behind one interface.

pub mod dice;
pub mod jaro;
pub mod levenshtein;

pub use dice::*;
pub use jaro::*;
pub use levenshtein::*;

use crate::error::{Result, SimilarityError};
use std::sync::Arc;

/// A pluggable similarity algorithm.
///
/// Returns a value between 0.0 (completely different) and 1.0 (identical).
/// Implementations must be pure functions of their inputs and the
/// configuration frozen at construction, so a single instance can be shared
/// across threads.
pub trait SimilarityStrategy: Send + Sync {
    fn score(&self, first: &str, second: &str) -> f64;

    /// Name of the algorithm for logging/configuration
    fn name(&self) -> &'static str;

    /// Convenience method for distance (1.0 - score)
    fn distance(&self, first: &str, second: &str) -> f64 {
        1.0 - self.score(first, second)
    }

    /// Score inputs that may be absent.
    ///
    /// A missing argument is rejected with [`SimilarityError::InvalidArgument`]
    /// and is never treated as an empty string.
    fn try_score(&self, first: Option<&str>, second: Option<&str>) -> Result<f64> {
        let first = first.ok_or(SimilarityError::InvalidArgument { argument: "first" })?;
        let second = second.ok_or(SimilarityError::InvalidArgument { argument: "second" })?;
        Ok(self.score(first, second))
    }
}

impl<S: SimilarityStrategy + ?Sized> SimilarityStrategy for &S {
    fn score(&self, first: &str, second: &str) -> f64 {
        (**self).score(first, second)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<S: SimilarityStrategy + ?Sized> SimilarityStrategy for Box<S> {
    fn score(&self, first: &str, second: &str) -> f64 {
        (**self).score(first, second)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<S: SimilarityStrategy + ?Sized> SimilarityStrategy for Arc<S> {
    fn score(&self, first: &str, second: &str) -> f64 {
        (**self).score(first, second)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_score_rejects_absent_inputs() {
        let strategy = Levenshtein::new();
        assert_eq!(
            strategy.try_score(None, Some("kEvIn")),
            Err(SimilarityError::InvalidArgument { argument: "first" })
        );
        assert_eq!(
            strategy.try_score(Some("kevin"), None),
            Err(SimilarityError::InvalidArgument { argument: "second" })
        );
    }

    #[test]
    fn test_try_score_does_not_treat_absent_as_empty() {
        // ("", "") scores 1.0, so an absent argument must not collapse to it
        let strategy = Levenshtein::new();
        assert_eq!(strategy.try_score(Some(""), Some("")), Ok(1.0));
        assert!(strategy.try_score(None, Some("")).is_err());
    }

    #[test]
    fn test_distance_is_complement() {
        let strategy = Levenshtein::new();
        let d = strategy.distance("Saturday", "Sunday");
        assert!((d - 0.375).abs() < 1e-9);
    }

    #[test]
    fn test_reflexive_for_all_strategies() {
        let strategies: Vec<Box<dyn SimilarityStrategy>> = vec![
            Box::new(DiceCoefficient::new()),
            Box::new(Jaro::new()),
            Box::new(JaroWinkler::new()),
            Box::new(Levenshtein::new()),
        ];
        for s in &strategies {
            for word in ["a", "Martha", "Mississippi", "McDonalds"] {
                assert!(
                    (s.score(word, word) - 1.0).abs() < 1e-12,
                    "{} not reflexive for {:?}",
                    s.name(),
                    word
                );
            }
        }
    }

    #[test]
    fn test_symmetric_strategies() {
        let strategies: Vec<Arc<dyn SimilarityStrategy>> = vec![
            Arc::new(DiceCoefficient::new()),
            Arc::new(Jaro::new()),
            Arc::new(JaroWinkler::new()),
            Arc::new(Levenshtein::new()),
        ];
        let pairs = [
            ("Martha", "Marhta"),
            ("Dwayne", "Duane"),
            ("Dixon", "Dicksonx"),
            ("kitten", "sitting"),
            ("", "abc"),
        ];
        for s in &strategies {
            for (a, b) in pairs {
                assert_eq!(s.score(a, b), s.score(b, a), "{} asymmetric", s.name());
            }
        }
    }

    #[test]
    fn test_scores_within_unit_range() {
        let strategies: Vec<Box<dyn SimilarityStrategy>> = vec![
            Box::new(DiceCoefficient::new()),
            Box::new(Jaro::new()),
            Box::new(JaroWinkler::new()),
            Box::new(Levenshtein::new()),
        ];
        let words = ["", "a", "abc", "Martha", "Marhta", "Oklahoma", "Mississippi"];
        for s in &strategies {
            for a in words {
                for b in words {
                    let v = s.score(a, b);
                    assert!((0.0..=1.0).contains(&v), "{}({:?}, {:?}) = {}", s.name(), a, b, v);
                }
            }
        }
    }
}
