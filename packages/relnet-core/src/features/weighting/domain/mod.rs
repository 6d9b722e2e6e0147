//! Weight strategy domain

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{NetworkError, Result};

/// Decay length for [`RankWeightMethod::ExponentialDecay`]
const EXPONENTIAL_DECAY_SCALE: f64 = 10.0;

/// How a search rank turns into an edge weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankWeightMethod {
    /// `1 / rank`
    InverseRank,
    /// `e^(-rank / 10)`
    ExponentialDecay,
    /// Always `1.0`
    Fixed,
}

impl RankWeightMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InverseRank => "inverse_rank",
            Self::ExponentialDecay => "exponential_decay",
            Self::Fixed => "fixed",
        }
    }
}

impl Default for RankWeightMethod {
    fn default() -> Self {
        Self::InverseRank
    }
}

impl fmt::Display for RankWeightMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankWeightMethod {
    type Err = NetworkError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "inverse_rank" => Ok(Self::InverseRank),
            "exponential_decay" => Ok(Self::ExponentialDecay),
            "fixed" => Ok(Self::Fixed),
            other => Err(NetworkError::invalid_parameter(format!(
                "unknown rank weight method '{}' (expected inverse_rank, exponential_decay or fixed)",
                other
            ))),
        }
    }
}

/// Rank weighting fixed at construction
///
/// The method cannot change after the strategy is built, so every edge of
/// one network is weighted the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankWeighting {
    method: RankWeightMethod,
}

impl RankWeighting {
    pub fn new(method: RankWeightMethod) -> Self {
        Self { method }
    }

    pub fn method(&self) -> RankWeightMethod {
        self.method
    }

    /// Weight for a 1-based rank
    ///
    /// Ranks below 1 are rejected: `1/r` is undefined at zero and negative
    /// ranks would produce negative weights.
    pub fn weight(&self, rank: i64) -> Result<f64> {
        if rank < 1 {
            return Err(NetworkError::invalid_parameter(format!(
                "rank must be >= 1, got {}",
                rank
            )));
        }
        let r = rank as f64;
        Ok(match self.method {
            RankWeightMethod::InverseRank => 1.0 / r,
            RankWeightMethod::ExponentialDecay => (-r / EXPONENTIAL_DECAY_SCALE).exp(),
            RankWeightMethod::Fixed => 1.0,
        })
    }
}

impl Default for RankWeighting {
    fn default() -> Self {
        Self::new(RankWeightMethod::default())
    }
}

/// Website → entity weight: `confidence × frequency`
pub fn confidence_weight(confidence: f64, frequency: i64) -> f64 {
    confidence * frequency as f64
}

/// Website → keyword weight: the upstream score, unchanged
pub fn passthrough_weight(score: f64) -> f64 {
    score
}
