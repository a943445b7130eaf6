//! Error types for similarity scoring

use thiserror::Error;

/// Errors raised by strategies and strategy configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimilarityError {
    /// A required input string was absent
    #[error("Invalid argument: `{argument}` must not be absent")]
    InvalidArgument {
        /// Which argument was missing (`first` or `second`)
        argument: &'static str,
    },

    /// Strategy name did not match any known algorithm
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

pub type Result<T> = std::result::Result<T, SimilarityError>;
