//! Serializable strategy selection
//!
//! Lets callers pick an algorithm by name (e.g. from a settings file they
//! own) and get back a boxed [`SimilarityStrategy`].

use crate::algorithms::{
    DiceCoefficient, Jaro, JaroWinkler, Levenshtein, SimilarityStrategy, DEFAULT_SCALING_FACTOR,
};
use crate::error::SimilarityError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

fn default_scaling_factor() -> f64 {
    DEFAULT_SCALING_FACTOR
}

/// Which algorithm to score with, plus its parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum StrategyConfig {
    Dice,
    Jaro,
    JaroWinkler {
        #[serde(default = "default_scaling_factor")]
        scaling_factor: f64,
    },
    Levenshtein,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        StrategyConfig::JaroWinkler {
            scaling_factor: DEFAULT_SCALING_FACTOR,
        }
    }
}

impl StrategyConfig {
    /// Instantiate the configured strategy
    pub fn build(&self) -> Box<dyn SimilarityStrategy> {
        match *self {
            StrategyConfig::Dice => Box::new(DiceCoefficient::new()),
            StrategyConfig::Jaro => Box::new(Jaro::new()),
            StrategyConfig::JaroWinkler { scaling_factor } => {
                Box::new(JaroWinkler::with_scaling_factor(scaling_factor))
            }
            StrategyConfig::Levenshtein => Box::new(Levenshtein::new()),
        }
    }
}

impl FromStr for StrategyConfig {
    type Err = SimilarityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dice" => Ok(StrategyConfig::Dice),
            "jaro" => Ok(StrategyConfig::Jaro),
            "jaro_winkler" | "jaro-winkler" | "jw" => Ok(StrategyConfig::default()),
            "levenshtein" => Ok(StrategyConfig::Levenshtein),
            _ => Err(SimilarityError::UnknownAlgorithm(s.to_string())),
        }
    }
}
