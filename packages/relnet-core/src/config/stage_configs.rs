//! Stage-specific configuration types
//!
//! Each pipeline stage has its own configuration struct with validation.

use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use super::validation::Validatable;
use crate::features::weighting::RankWeightMethod;
use crate::shared::constants::{backbone, limits};
use serde::{Deserialize, Serialize};

// ============================================================================
// Builders
// ============================================================================

/// Search → website network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchWebsiteConfig {
    /// How a rank turns into an edge weight
    pub weight_method: RankWeightMethod,

    /// Collapse result URLs into one node per domain
    pub aggregate_by_domain: bool,

    /// Ignore results ranked below this position (1-based, inclusive)
    pub max_rank: Option<i64>,

    pub directed: bool,
}

impl Default for SearchWebsiteConfig {
    fn default() -> Self {
        Self {
            weight_method: RankWeightMethod::InverseRank,
            aggregate_by_domain: true,
            max_rank: None,
            directed: false,
        }
    }
}

impl SearchWebsiteConfig {
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Exploratory => Self {
                aggregate_by_domain: false,
                ..Self::default()
            },
            Preset::Balanced => Self::default(),
            Preset::Strict => Self {
                max_rank: Some(10),
                ..Self::default()
            },
        }
    }
}

impl Validatable for SearchWebsiteConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(max_rank) = self.max_rank {
            if max_rank < 1 {
                return Err(ConfigError::range_with_hint(
                    "max_rank",
                    max_rank,
                    1,
                    i64::MAX,
                    "Ranks are 1-based; use null to keep every result",
                ));
            }
        }
        Ok(())
    }

    fn section(&self) -> &'static str {
        "search_website"
    }
}

/// Website → keyword network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebsiteKeywordConfig {
    pub aggregate_by_domain: bool,

    /// Keep at most this many keywords per website/domain (by avg score × frequency)
    pub top_k_per_unit: Option<usize>,

    /// Drop selected keywords whose average score is below this value
    pub min_score: Option<f64>,

    /// Accepted languages (empty = all)
    pub languages: Vec<String>,

    /// Longest accepted n-gram (None = any)
    pub max_ngram: Option<u32>,
}

impl Default for WebsiteKeywordConfig {
    fn default() -> Self {
        Self {
            aggregate_by_domain: true,
            top_k_per_unit: Some(50),
            min_score: None,
            languages: Vec::new(),
            max_ngram: None,
        }
    }
}

impl WebsiteKeywordConfig {
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Exploratory => Self {
                aggregate_by_domain: false,
                top_k_per_unit: None,
                ..Self::default()
            },
            Preset::Balanced => Self::default(),
            Preset::Strict => Self {
                top_k_per_unit: Some(20),
                min_score: Some(0.05),
                ..Self::default()
            },
        }
    }
}

impl Validatable for WebsiteKeywordConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_top_k(self.top_k_per_unit)?;
        validate_cutoff("min_score", self.min_score)?;
        if self.max_ngram == Some(0) {
            return Err(ConfigError::range_with_hint(
                "max_ngram",
                0,
                1,
                u32::MAX,
                "Use null to accept any n-gram length",
            ));
        }
        Ok(())
    }

    fn section(&self) -> &'static str {
        "website_keyword"
    }
}

/// Website → named entity network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebsiteNerConfig {
    pub aggregate_by_domain: bool,

    /// Keep at most this many entities per website/domain (by avg confidence × frequency)
    pub top_k_per_unit: Option<usize>,

    /// Drop selected entities whose average confidence is below this value
    pub min_confidence: Option<f64>,

    /// Accepted entity labels such as PER, ORG, LOC (empty = all)
    pub entity_labels: Vec<String>,

    /// Accepted languages (empty = all)
    pub languages: Vec<String>,
}

impl Default for WebsiteNerConfig {
    fn default() -> Self {
        Self {
            aggregate_by_domain: true,
            top_k_per_unit: Some(50),
            min_confidence: None,
            entity_labels: Vec::new(),
            languages: Vec::new(),
        }
    }
}

impl WebsiteNerConfig {
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Exploratory => Self {
                aggregate_by_domain: false,
                top_k_per_unit: None,
                ..Self::default()
            },
            Preset::Balanced => Self::default(),
            Preset::Strict => Self {
                top_k_per_unit: Some(20),
                min_confidence: Some(0.7),
                ..Self::default()
            },
        }
    }
}

impl Validatable for WebsiteNerConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_top_k(self.top_k_per_unit)?;
        if let Some(c) = self.min_confidence {
            if !(0.0..=1.0).contains(&c) {
                return Err(ConfigError::range_with_hint(
                    "min_confidence",
                    c,
                    0.0,
                    1.0,
                    "Confidence scores are probabilities",
                ));
            }
        }
        Ok(())
    }

    fn section(&self) -> &'static str {
        "website_ner"
    }
}

// ============================================================================
// Backboning
// ============================================================================

/// Backbone extraction settings
///
/// `algorithm: None` skips pruning entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackboneConfig {
    /// disparity_filter | threshold | top_k
    pub algorithm: Option<String>,
    pub alpha: f64,
    pub threshold: Option<f64>,
    pub k: Option<usize>,
    pub min_edge_weight: Option<f64>,
    pub weight_attr: String,
}

impl Default for BackboneConfig {
    fn default() -> Self {
        Self {
            algorithm: None,
            alpha: backbone::DEFAULT_ALPHA,
            threshold: None,
            k: None,
            min_edge_weight: None,
            weight_attr: backbone::WEIGHT_ATTR.to_string(),
        }
    }
}

impl BackboneConfig {
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Exploratory => Self::default(),
            Preset::Balanced => Self {
                algorithm: Some("disparity_filter".to_string()),
                ..Self::default()
            },
            Preset::Strict => Self {
                algorithm: Some("disparity_filter".to_string()),
                alpha: 0.01,
                ..Self::default()
            },
        }
    }
}

impl Validatable for BackboneConfig {
    fn validate(&self) -> ConfigResult<()> {
        if !(self.alpha > 0.0 && self.alpha <= 1.0) {
            return Err(ConfigError::range_with_hint(
                "alpha",
                self.alpha,
                "0 (exclusive)",
                1.0,
                "Significance level is a probability",
            ));
        }
        validate_cutoff("min_edge_weight", self.min_edge_weight)?;
        if self.weight_attr.trim().is_empty() {
            return Err(ConfigError::Custom(
                "weight_attr must name an edge attribute (default: weight)".to_string(),
            ));
        }
        Ok(())
    }

    fn section(&self) -> &'static str {
        "backbone"
    }
}

// ============================================================================
// Limits / Metrics / Export
// ============================================================================

/// Hard caps checked right after building
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub max_nodes: usize,
    pub max_edges: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_nodes: limits::DEFAULT_MAX_NODES,
            max_edges: limits::DEFAULT_MAX_EDGES,
        }
    }
}

impl Validatable for LimitsConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_nodes == 0 {
            return Err(ConfigError::range_with_hint(
                "max_nodes",
                0,
                1,
                usize::MAX,
                "A zero cap would reject every network",
            ));
        }
        if self.max_edges == 0 {
            return Err(ConfigError::range_with_hint(
                "max_edges",
                0,
                1,
                usize::MAX,
                "A zero cap would reject every network",
            ));
        }
        Ok(())
    }

    fn section(&self) -> &'static str {
        "limits"
    }
}

/// Optional centrality measures (degree centrality is always computed)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub betweenness: bool,
    pub closeness: bool,
    pub eigenvector: bool,
    /// Nodes per type listed in the summary, by degree
    pub top_nodes: usize,
}

impl MetricsConfig {
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Exploratory => Self {
                top_nodes: 10,
                ..Self::default()
            },
            Preset::Balanced => Self {
                eigenvector: true,
                top_nodes: 10,
                ..Self::default()
            },
            Preset::Strict => Self {
                betweenness: true,
                closeness: true,
                eigenvector: true,
                top_nodes: 20,
            },
        }
    }
}

impl Validatable for MetricsConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }

    fn section(&self) -> &'static str {
        "metrics"
    }
}

/// Linear weight rescale applied just before export
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// gexf | graphml | edgelist | csv | json
    pub format: String,
    pub normalize: Option<WeightRange>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: "gexf".to_string(),
            normalize: None,
        }
    }
}

impl Validatable for ExportConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(range) = self.normalize {
            if !(range.min >= 0.0 && range.min <= range.max) {
                return Err(ConfigError::conflict(
                    format!("normalize range [{}, {}] is empty or negative", range.min, range.max),
                    "use 0 <= min <= max",
                ));
            }
        }
        Ok(())
    }

    fn section(&self) -> &'static str {
        "export"
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn validate_top_k(top_k: Option<usize>) -> ConfigResult<()> {
    if top_k == Some(0) {
        return Err(ConfigError::range_with_hint(
            "top_k_per_unit",
            0,
            1,
            usize::MAX,
            "Use null to keep every term",
        ));
    }
    Ok(())
}

fn validate_cutoff(field: &str, value: Option<f64>) -> ConfigResult<()> {
    if let Some(v) = value {
        if !v.is_finite() || v < 0.0 {
            return Err(ConfigError::range_with_hint(
                field,
                v,
                0.0,
                f64::MAX,
                "Cutoffs apply to non-negative scores",
            ));
        }
    }
    Ok(())
}
