//! Scored candidate value type

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A candidate string paired with its similarity score.
///
/// Immutable once built. Equality and hashing are bit-exact on the score:
/// two scores that differ only by floating point rounding are not equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityScore {
    key: String,
    score: f64,
}

impl SimilarityScore {
    pub fn new(key: impl Into<String>, score: f64) -> Self {
        Self {
            key: key.into(),
            score,
        }
    }

    /// The candidate string that was scored
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn into_key(self) -> String {
        self.key
    }
}

impl PartialEq for SimilarityScore {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.score.to_bits() == other.score.to_bits()
    }
}

impl Eq for SimilarityScore {}

impl Hash for SimilarityScore {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
        self.score.to_bits().hash(state);
    }
}

impl fmt::Display for SimilarityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.4}", self.key, self.score)
    }
}
