//! Backboning domain types

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

use crate::config::BackboneConfig;
use crate::errors::{NetworkError, Result};
use crate::shared::constants::backbone::{DEFAULT_ALPHA, WEIGHT_ATTR};
use crate::shared::models::Graph;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackboneAlgorithm {
    DisparityFilter,
    Threshold,
    TopK,
}

impl BackboneAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DisparityFilter => "disparity_filter",
            Self::Threshold => "threshold",
            Self::TopK => "top_k",
        }
    }
}

impl fmt::Display for BackboneAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackboneAlgorithm {
    type Err = NetworkError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "disparity_filter" | "disparity" => Ok(Self::DisparityFilter),
            "threshold" => Ok(Self::Threshold),
            "top_k" => Ok(Self::TopK),
            other => Err(NetworkError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

/// Parameters for every algorithm; each reads the fields it needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackboneParams {
    pub alpha: f64,
    pub threshold: Option<f64>,
    pub k: Option<usize>,
    /// Edges strictly below this weight are dropped before the algorithm runs
    pub min_edge_weight: Option<f64>,
    pub weight_attr: String,
}

impl Default for BackboneParams {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            threshold: None,
            k: None,
            min_edge_weight: None,
            weight_attr: WEIGHT_ATTR.to_string(),
        }
    }
}

impl BackboneParams {
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn with_k(mut self, k: usize) -> Self {
        self.k = Some(k);
        self
    }

    pub fn with_min_edge_weight(mut self, min: f64) -> Self {
        self.min_edge_weight = Some(min);
        self
    }

    pub fn with_weight_attr(mut self, attr: impl Into<String>) -> Self {
        self.weight_attr = attr.into();
        self
    }

    /// Echo of the parameters relevant to `algorithm`
    pub fn echo(&self, algorithm: BackboneAlgorithm) -> Value {
        match algorithm {
            BackboneAlgorithm::DisparityFilter => json!({
                "alpha": self.alpha,
                "min_edge_weight": self.min_edge_weight,
            }),
            BackboneAlgorithm::Threshold => json!({
                "threshold": self.threshold,
                "weight_attr": self.weight_attr,
                "min_edge_weight": self.min_edge_weight,
            }),
            BackboneAlgorithm::TopK => json!({
                "k": self.k,
                "weight_attr": self.weight_attr,
                "min_edge_weight": self.min_edge_weight,
            }),
        }
    }

    pub(crate) fn validate(&self, algorithm: BackboneAlgorithm) -> Result<()> {
        if algorithm == BackboneAlgorithm::DisparityFilter
            && !(self.alpha > 0.0 && self.alpha <= 1.0)
        {
            return Err(NetworkError::invalid_parameter(format!(
                "alpha must be in (0, 1], got {}",
                self.alpha
            )));
        }
        if let Some(t) = self.threshold {
            if t.is_nan() {
                return Err(NetworkError::invalid_parameter("threshold must be a number"));
            }
        }
        if let Some(m) = self.min_edge_weight {
            if m.is_nan() {
                return Err(NetworkError::invalid_parameter(
                    "min_edge_weight must be a number",
                ));
            }
        }
        Ok(())
    }
}

impl From<&BackboneConfig> for BackboneParams {
    fn from(config: &BackboneConfig) -> Self {
        Self {
            alpha: config.alpha,
            threshold: config.threshold,
            k: config.k,
            min_edge_weight: config.min_edge_weight,
            weight_attr: config.weight_attr.clone(),
        }
    }
}

/// Before/after counts of one backbone run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackboneStats {
    pub algorithm: BackboneAlgorithm,
    pub original_nodes: usize,
    pub original_edges: usize,
    pub result_nodes: usize,
    pub result_edges: usize,
    pub nodes_removed: usize,
    pub edges_removed: usize,
    /// `result_edges / original_edges`, 0 when the input had no edges
    pub edge_retention_rate: f64,
    pub parameters: Value,
}

impl BackboneStats {
    pub fn new(
        algorithm: BackboneAlgorithm,
        original: &Graph,
        result: &Graph,
        parameters: Value,
    ) -> Self {
        let original_edges = original.edge_count();
        let result_edges = result.edge_count();
        Self {
            algorithm,
            original_nodes: original.node_count(),
            original_edges,
            result_nodes: result.node_count(),
            result_edges,
            nodes_removed: original.node_count().saturating_sub(result.node_count()),
            edges_removed: original_edges.saturating_sub(result_edges),
            edge_retention_rate: if original_edges == 0 {
                0.0
            } else {
                result_edges as f64 / original_edges as f64
            },
            parameters,
        }
    }
}
