//! Dice coefficient over character bigram sets
//!
//! Compares strings by the overlap of their distinct two-character windows:
//!
//! ```text
//!        2 * |S1 ∩ S2|
//! D = -------------------
//!        |S1| + |S2|
//! ```
//!
//! Strings shorter than two characters contribute the whole string as their
//! only "bigram", so `""` vs `""` and `"a"` vs `"a"` score 1.0 and no input
//! can produce an empty set (the denominator is never zero).

use super::SimilarityStrategy;
use ahash::AHashSet;

/// Dice coefficient strategy
///
/// Case-sensitive; bigrams are compared by exact (ordinal) string equality.
///
/// # Complexity
/// - Time: O(m+n) for bigram extraction and intersection
/// - Space: O(m+n) for the two bigram sets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiceCoefficient;

impl DiceCoefficient {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SimilarityStrategy for DiceCoefficient {
    fn score(&self, first: &str, second: &str) -> f64 {
        dice_coefficient(first, second)
    }

    fn name(&self) -> &'static str {
        "dice"
    }
}

/// Distinct bigrams of `s`.
///
/// A string with fewer than two characters yields a singleton set holding
/// the string itself (including the empty string).
#[must_use]
pub fn bigrams(s: &str) -> AHashSet<String> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() < 2 {
        let mut set = AHashSet::with_capacity(1);
        set.insert(s.to_string());
        return set;
    }

    chars.windows(2).map(|w| w.iter().collect()).collect()
}

/// Calculate the Dice coefficient between two strings.
/// Returns a value between 0.0 and 1.0.
#[must_use]
pub fn dice_coefficient(first: &str, second: &str) -> f64 {
    let s1 = bigrams(first);
    let s2 = bigrams(second);

    let intersection = s1.intersection(&s2).count();

    (2.0 * intersection as f64) / (s1.len() + s2.len()) as f64
}
