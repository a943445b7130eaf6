//! Jaro and Jaro-Winkler similarity implementations
//!
//! Excellent for name matching and short strings.
//! Jaro-Winkler gives extra weight to common prefixes.
//!
//! Both strategies compare case-insensitively. Matching characters are
//! searched within a window of `shorter_len / 2 + 1` positions, and the
//! matching pass runs in both directions (shorter over longer, then longer
//! over shorter). The two passes can disagree; when they find a different
//! number of matches the strings are scored 0.0. Two empty strings have no
//! matching characters and also score 0.0.

use super::SimilarityStrategy;
use smallvec::SmallVec;
use tracing::warn;

/// Default prefix scaling factor used by Winkler
pub const DEFAULT_SCALING_FACTOR: f64 = 0.1;

/// Scaling factors above this value are clamped down to it
pub const MAX_SCALING_FACTOR: f64 = 0.25;

/// Maximum number of leading characters that earn the prefix bonus
pub const MAX_PREFIX_LENGTH: usize = 4;

type CharBuf = SmallVec<[char; 64]>;

// ============================================================================
// Public API
// ============================================================================

/// Jaro similarity calculator
///
/// # Complexity
/// - Time: O(m*w) where w is the match window
/// - Space: O(m+n) for the lower-cased chars and consumed flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jaro;

impl Jaro {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SimilarityStrategy for Jaro {
    fn score(&self, first: &str, second: &str) -> f64 {
        jaro_similarity(first, second)
    }

    fn name(&self) -> &'static str {
        "jaro"
    }
}

/// Configuration for Jaro-Winkler similarity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JaroWinklerConfig {
    /// Prefix scaling factor (typically 0.1, max 0.25)
    pub scaling_factor: f64,
}

impl Default for JaroWinklerConfig {
    fn default() -> Self {
        Self {
            scaling_factor: DEFAULT_SCALING_FACTOR,
        }
    }
}

/// Jaro-Winkler similarity calculator
///
/// Wraps a [`Jaro`] computation and adds a bonus for a shared prefix of up
/// to four characters. The scaling factor is clamped to at most 0.25 at
/// construction; there is no lower bound, so a zero or negative factor
/// degrades to plain Jaro (or below it).
///
/// With the maximum factor of 0.25 and a four character common prefix the
/// bonus term equals `1 - jaro`, so floating point rounding may land a hair
/// above 1.0. The result is returned unclamped.
#[derive(Debug, Clone, PartialEq)]
pub struct JaroWinkler {
    jaro: Jaro,
    scaling_factor: f64,
}

impl Default for JaroWinkler {
    fn default() -> Self {
        Self::from_config(JaroWinklerConfig::default())
    }
}

impl JaroWinkler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a custom scaling factor (clamped to at most 0.25)
    #[must_use]
    pub fn with_scaling_factor(scaling_factor: f64) -> Self {
        Self {
            jaro: Jaro::new(),
            scaling_factor: sanitize_scaling_factor(scaling_factor),
        }
    }

    /// Create from configuration
    #[must_use]
    pub fn from_config(config: JaroWinklerConfig) -> Self {
        Self::with_scaling_factor(config.scaling_factor)
    }

    /// Get current configuration
    #[must_use]
    pub fn config(&self) -> JaroWinklerConfig {
        JaroWinklerConfig {
            scaling_factor: self.scaling_factor,
        }
    }

    #[must_use]
    pub fn scaling_factor(&self) -> f64 {
        self.scaling_factor
    }
}

impl SimilarityStrategy for JaroWinkler {
    fn score(&self, first: &str, second: &str) -> f64 {
        let jaro = self.jaro.score(first, second);
        winkler_adjust(jaro, common_prefix_length(first, second), self.scaling_factor)
    }

    fn name(&self) -> &'static str {
        "jaro_winkler"
    }
}

fn sanitize_scaling_factor(scaling_factor: f64) -> f64 {
    // +inf falls through to the upper clamp below
    if scaling_factor.is_nan() || scaling_factor == f64::NEG_INFINITY {
        warn!(
            requested = scaling_factor,
            fallback = DEFAULT_SCALING_FACTOR,
            "jaro-winkler scaling factor is not usable, using default"
        );
        return DEFAULT_SCALING_FACTOR;
    }
    if scaling_factor > MAX_SCALING_FACTOR {
        warn!(
            requested = scaling_factor,
            clamped = MAX_SCALING_FACTOR,
            "jaro-winkler scaling factor clamped"
        );
        return MAX_SCALING_FACTOR;
    }
    scaling_factor
}

/// Calculate Jaro similarity between two strings, ignoring case.
/// Returns a value between 0.0 and 1.0.
#[must_use]
pub fn jaro_similarity(first: &str, second: &str) -> f64 {
    let (shorter, longer) = order_by_length(first, second);
    jaro_chars(&shorter, &longer)
}

/// Calculate Jaro-Winkler similarity with the default scaling factor.
#[inline]
#[must_use]
pub fn jaro_winkler_similarity(first: &str, second: &str) -> f64 {
    jaro_winkler_similarity_with(first, second, DEFAULT_SCALING_FACTOR)
}

/// Calculate Jaro-Winkler similarity with a custom scaling factor.
///
/// The factor is used as given; clamping only happens when constructing a
/// [`JaroWinkler`] strategy.
#[must_use]
pub fn jaro_winkler_similarity_with(first: &str, second: &str, scaling_factor: f64) -> f64 {
    let (shorter, longer) = order_by_length(first, second);
    let jaro = jaro_chars(&shorter, &longer);
    winkler_adjust(jaro, prefix_length_chars(&shorter, &longer), scaling_factor)
}

/// Number of leading characters (case-insensitive) shared by both strings,
/// capped at [`MAX_PREFIX_LENGTH`].
#[must_use]
pub fn common_prefix_length(first: &str, second: &str) -> usize {
    let (shorter, longer) = order_by_length(first, second);
    prefix_length_chars(&shorter, &longer)
}

// ============================================================================
// Internals
// ============================================================================

/// No bonus applies without a shared prefix or when Jaro is already 1.0;
/// returning early there keeps an infinite factor from producing `inf * 0`.
#[inline]
fn winkler_adjust(jaro: f64, prefix_len: usize, scaling_factor: f64) -> f64 {
    if prefix_len == 0 || jaro == 1.0 {
        return jaro;
    }
    jaro + (scaling_factor * prefix_len as f64 * (1.0 - jaro))
}

/// Lower-case both inputs and return them as (shorter, longer).
/// On equal length the second argument is treated as the longer one.
fn order_by_length(first: &str, second: &str) -> (CharBuf, CharBuf) {
    let first: CharBuf = first.to_lowercase().chars().collect();
    let second: CharBuf = second.to_lowercase().chars().collect();
    if first.len() > second.len() {
        (second, first)
    } else {
        (first, second)
    }
}

fn jaro_chars(shorter: &[char], longer: &[char]) -> f64 {
    let half_length = shorter.len() / 2 + 1;

    let m1 = matching_characters(shorter, longer, half_length);
    let m2 = matching_characters(longer, shorter, half_length);

    if m1.is_empty() || m2.is_empty() {
        return 0.0;
    }
    if m1.len() != m2.len() {
        return 0.0;
    }

    let matches = m1.len() as f64;
    let transpositions = transpositions(&m1, &m2) as f64;

    (matches / shorter.len() as f64
        + matches / longer.len() as f64
        + (matches - transpositions) / matches)
        / 3.0
}

/// Characters of `first` that find an unconsumed equal character in
/// `second` within `limit` positions, in scan order.
///
/// The consumed flags live only for this call.
fn matching_characters(first: &[char], second: &[char], limit: usize) -> CharBuf {
    let mut consumed: SmallVec<[bool; 64]> = smallvec::smallvec![false; second.len()];
    let mut common = CharBuf::new();

    for (i, &ch) in first.iter().enumerate() {
        let start = i.saturating_sub(limit);
        let end = (i + limit).min(second.len());

        for j in start..end {
            if consumed[j] || second[j] != ch {
                continue;
            }
            consumed[j] = true;
            common.push(ch);
            break;
        }
    }

    common
}

/// Half the number of positions where the two match strings disagree.
fn transpositions(m1: &[char], m2: &[char]) -> usize {
    m1.iter().zip(m2).filter(|(a, b)| a != b).count() / 2
}

fn prefix_length_chars(shorter: &[char], longer: &[char]) -> usize {
    shorter
        .iter()
        .zip(longer)
        .take_while(|(a, b)| a == b)
        .take(MAX_PREFIX_LENGTH)
        .count()
}
