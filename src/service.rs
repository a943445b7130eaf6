//! Scoring service: one strategy applied across a list of candidates
//!
//! The service owns (or borrows) exactly one [`SimilarityStrategy`] for its
//! whole lifetime. To score with another algorithm, build another service.

use crate::algorithms::SimilarityStrategy;
use crate::config::StrategyConfig;
use crate::ordering::{descending, ScoreOrder};
use crate::score::SimilarityScore;
use rayon::prelude::*;
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Minimum number of features before `score_all` fans out across the rayon
/// pool. Below this, thread coordination costs more than the scoring.
pub const PARALLEL_THRESHOLD: usize = 100;

/// Scores features against a target with a fixed strategy.
///
/// # Example
///
/// ```rust
/// use string_similarity::{Levenshtein, StringSimilarityService};
///
/// let service = StringSimilarityService::new(Levenshtein::new());
/// let top = service
///     .find_top(&["Sunday", "Saturday", "Monday"], "Sundae")
///     .unwrap();
/// assert_eq!(top.key(), "Sunday");
/// ```
#[derive(Debug, Clone)]
pub struct StringSimilarityService<S> {
    strategy: S,
}

impl<S: SimilarityStrategy> StringSimilarityService<S> {
    pub fn new(strategy: S) -> Self {
        debug!(strategy = strategy.name(), "similarity service created");
        Self { strategy }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Score a single feature against the target.
    pub fn score(&self, feature: &str, target: &str) -> f64 {
        self.strategy.score(feature, target)
    }

    /// Score every feature against the target, preserving input order.
    ///
    /// The strategy is always called as `score(feature, target)`.
    pub fn score_all<F>(&self, features: &[F], target: &str) -> Vec<SimilarityScore>
    where
        F: AsRef<str> + Sync,
    {
        let score_one = |feature: &F| {
            let feature = feature.as_ref();
            SimilarityScore::new(feature, self.strategy.score(feature, target))
        };

        if features.len() >= PARALLEL_THRESHOLD {
            features.par_iter().map(score_one).collect()
        } else {
            features.iter().map(score_one).collect()
        }
    }

    /// Best match by descending score. Ties keep the earliest feature.
    ///
    /// Returns `None` for an empty feature list.
    pub fn find_top<F>(&self, features: &[F], target: &str) -> Option<SimilarityScore>
    where
        F: AsRef<str> + Sync,
    {
        self.find_top_by(features, target, descending)
    }

    /// Like [`find_top`](Self::find_top) with a named ordering.
    pub fn find_top_with_order<F>(
        &self,
        features: &[F],
        target: &str,
        order: ScoreOrder,
    ) -> Option<SimilarityScore>
    where
        F: AsRef<str> + Sync,
    {
        self.find_top_by(features, target, |x, y| order.compare(x, y))
    }

    /// First score after a stable sort with `compare`.
    ///
    /// An ascending comparator yields the lowest score, a descending one the
    /// highest. Returns `None` for an empty feature list.
    pub fn find_top_by<F, C>(
        &self,
        features: &[F],
        target: &str,
        compare: C,
    ) -> Option<SimilarityScore>
    where
        F: AsRef<str> + Sync,
        C: Fn(&SimilarityScore, &SimilarityScore) -> Ordering,
    {
        if features.is_empty() {
            trace!("find_top called with no features");
            return None;
        }

        let mut scores = self.score_all(features, target);
        scores.sort_by(|x, y| compare(x, y));

        let top = scores.into_iter().next();
        if let Some(top) = &top {
            debug!(
                strategy = self.strategy.name(),
                candidates = features.len(),
                key = top.key(),
                score = top.score(),
                "selected top match"
            );
        }
        top
    }
}

impl StringSimilarityService<Box<dyn SimilarityStrategy>> {
    /// Build a service around the strategy named by `config`.
    pub fn from_config(config: &StrategyConfig) -> Self {
        Self::new(config.build())
    }
}
