//! string-similarity - pluggable string similarity scoring
//!
//! Scores two strings in [0.0, 1.0] with one of several interchangeable
//! strategies, and ranks a list of candidate strings ("features") against a
//! target to pick the best (or worst) match.
//!
//! # Features
//! - Dice coefficient over character bigram sets
//! - Jaro and Jaro-Winkler (case-insensitive)
//! - Normalized Levenshtein (case-insensitive)
//! - [`StringSimilarityService`] for batch scoring and top-match selection
//!
//! # Example
//!
//! ```rust
//! use string_similarity::{ascending, JaroWinkler, StringSimilarityService};
//!
//! let service = StringSimilarityService::new(JaroWinkler::new());
//! let features = ["MacMahons", "McPherson", "McDonalds"];
//!
//! let best = service.find_top(&features, "McDonalds").unwrap();
//! assert_eq!(best.key(), "McDonalds");
//!
//! let worst = service.find_top_by(&features, "McDonalds", ascending).unwrap();
//! assert!(worst.score() < best.score());
//! ```

pub mod algorithms;
pub mod config;
pub mod error;
pub mod ordering;
pub mod score;
pub mod service;

pub use algorithms::{
    dice_coefficient, jaro_similarity, jaro_winkler_similarity, jaro_winkler_similarity_with,
    levenshtein_distance, normalized_levenshtein, DiceCoefficient, Jaro, JaroWinkler,
    JaroWinklerConfig, Levenshtein, SimilarityStrategy,
};
pub use config::StrategyConfig;
pub use error::{Result, SimilarityError};
pub use ordering::{ascending, descending, ScoreOrder};
pub use score::SimilarityScore;
pub use service::{StringSimilarityService, PARALLEL_THRESHOLD};
