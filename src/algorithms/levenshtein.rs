//! Levenshtein (edit) distance implementation
//!
//! Unit-cost insertions, deletions and substitutions computed with a
//! two-row dynamic program over Unicode characters. The strategy form
//! folds case and normalizes the distance by the longer input:
//!
//! ```text
//! score = 1 - distance / max(len(a), len(b))
//! ```
//!
//! Two empty strings have distance 0 and score 1.0.

use super::SimilarityStrategy;
use smallvec::SmallVec;

/// Normalized Levenshtein similarity strategy (case-insensitive)
///
/// # Complexity
/// - Time: O(m*n)
/// - Space: O(min(m, n)) for the DP rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein;

impl Levenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SimilarityStrategy for Levenshtein {
    fn score(&self, first: &str, second: &str) -> f64 {
        normalized_levenshtein(first, second)
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

/// Raw edit distance between two strings (case-sensitive).
#[must_use]
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: SmallVec<[char; 64]> = a.chars().collect();
    let b: SmallVec<[char; 64]> = b.chars().collect();
    edit_distance(&a, &b)
}

/// Case-insensitive edit distance normalized to a similarity in [0.0, 1.0].
#[must_use]
pub fn normalized_levenshtein(a: &str, b: &str) -> f64 {
    let a: SmallVec<[char; 64]> = a.to_lowercase().chars().collect();
    let b: SmallVec<[char; 64]> = b.to_lowercase().chars().collect();

    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 1.0;
    }

    1.0 - (edit_distance(&a, &b) as f64 / max_len as f64)
}

/// Two-row edit distance; the shorter input indexes the rows.
fn edit_distance(a: &[char], b: &[char]) -> usize {
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if inner.is_empty() {
        return outer.len();
    }

    let mut previous: SmallVec<[usize; 64]> = (0..=inner.len()).collect();
    let mut current: SmallVec<[usize; 64]> = smallvec::smallvec![0; inner.len() + 1];

    for (i, &oc) in outer.iter().enumerate() {
        current[0] = i + 1;
        for (j, &ic) in inner.iter().enumerate() {
            let replace = previous[j] + usize::from(oc != ic);
            let remove = previous[j + 1] + 1;
            let insert = current[j] + 1;
            current[j + 1] = replace.min(remove).min(insert);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[inner.len()]
}
