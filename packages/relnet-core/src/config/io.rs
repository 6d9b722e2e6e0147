//! Configuration I/O (YAML loading)
//!
//! Defines the YAML schema types. Loading and saving live in network_config.rs.

use super::stage_configs::*;
use serde::{Deserialize, Serialize};

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    pub version: u32,

    /// Base preset
    pub preset: String,

    /// Whole-section overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<ConfigOverrides>,
}

/// Configuration overrides
///
/// A section replaces the preset's section; fields omitted inside a section
/// take that section's defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_website: Option<SearchWebsiteConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_keyword: Option<WebsiteKeywordConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_ner: Option<WebsiteNerConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub backbone: Option<BackboneConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<LimitsConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<MetricsConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportConfig>,
}
