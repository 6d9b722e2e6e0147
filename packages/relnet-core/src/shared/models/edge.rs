//! Edge model

use serde::{Deserialize, Serialize};

use super::Attributes;
use crate::shared::constants::backbone::WEIGHT_ATTR;

/// Weighted edge between two node ids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    /// Always finite and >= 0
    pub weight: f64,
    /// Builder-specific attributes (rank, frequency, confidence, ...)
    #[serde(default)]
    pub attrs: Attributes,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
            attrs: Attributes::new(),
        }
    }

    /// Numeric value used for ranking and thresholds
    ///
    /// `"weight"` reads the edge weight. Any other name reads a numeric
    /// attribute; missing or non-numeric attributes count as `0.0`.
    pub fn value(&self, attr: &str) -> f64 {
        if attr == WEIGHT_ATTR {
            return self.weight;
        }
        self.attrs.get(attr).and_then(|v| v.as_f64()).unwrap_or(0.0)
    }

    /// Whether this edge joins `a` and `b`, ignoring direction
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}
