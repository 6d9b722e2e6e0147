//! Network configuration
//!
//! Main configuration struct with preset-based defaults and override support.

use super::{
    error::{ConfigError, ConfigResult},
    io::{ConfigExportV1, ConfigOverrides},
    preset::Preset,
    stage_configs::*,
    validation::validate_sections,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Supported YAML schema versions
const SUPPORTED_VERSIONS: &[u32] = &[1];

/// Full network-generation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub preset: Preset,
    pub search_website: SearchWebsiteConfig,
    pub website_keyword: WebsiteKeywordConfig,
    pub website_ner: WebsiteNerConfig,
    pub backbone: BackboneConfig,
    pub limits: LimitsConfig,
    pub metrics: MetricsConfig,
    pub export: ExportConfig,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}

impl NetworkConfig {
    /// Start from a preset
    pub fn preset(preset: Preset) -> Self {
        Self {
            preset,
            search_website: SearchWebsiteConfig::from_preset(preset),
            website_keyword: WebsiteKeywordConfig::from_preset(preset),
            website_ner: WebsiteNerConfig::from_preset(preset),
            backbone: BackboneConfig::from_preset(preset),
            limits: LimitsConfig::default(),
            metrics: MetricsConfig::from_preset(preset),
            export: ExportConfig::default(),
        }
    }

    pub fn search_website<F: FnOnce(&mut SearchWebsiteConfig)>(mut self, f: F) -> Self {
        f(&mut self.search_website);
        self
    }

    pub fn website_keyword<F: FnOnce(&mut WebsiteKeywordConfig)>(mut self, f: F) -> Self {
        f(&mut self.website_keyword);
        self
    }

    pub fn website_ner<F: FnOnce(&mut WebsiteNerConfig)>(mut self, f: F) -> Self {
        f(&mut self.website_ner);
        self
    }

    pub fn backbone<F: FnOnce(&mut BackboneConfig)>(mut self, f: F) -> Self {
        f(&mut self.backbone);
        self
    }

    pub fn limits<F: FnOnce(&mut LimitsConfig)>(mut self, f: F) -> Self {
        f(&mut self.limits);
        self
    }

    pub fn metrics<F: FnOnce(&mut MetricsConfig)>(mut self, f: F) -> Self {
        f(&mut self.metrics);
        self
    }

    pub fn export<F: FnOnce(&mut ExportConfig)>(mut self, f: F) -> Self {
        f(&mut self.export);
        self
    }

    /// Validate every section and freeze the configuration
    pub fn build(self) -> ConfigResult<ValidatedConfig> {
        validate_sections(&[
            &self.search_website,
            &self.website_keyword,
            &self.website_ner,
            &self.backbone,
            &self.limits,
            &self.metrics,
            &self.export,
        ])?;
        Ok(ValidatedConfig(self))
    }

    /// Load from a versioned YAML file and validate
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<ValidatedConfig> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<ValidatedConfig> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        if !SUPPORTED_VERSIONS.contains(&export.version) {
            return Err(ConfigError::UnsupportedVersion {
                found: export.version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let mut config = Self::preset(Preset::parse(&export.preset)?);

        if let Some(overrides) = export.overrides {
            config.apply_overrides(overrides);
        }

        config.build()
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(cfg) = overrides.search_website {
            self.search_website = cfg;
        }
        if let Some(cfg) = overrides.website_keyword {
            self.website_keyword = cfg;
        }
        if let Some(cfg) = overrides.website_ner {
            self.website_ner = cfg;
        }
        if let Some(cfg) = overrides.backbone {
            self.backbone = cfg;
        }
        if let Some(cfg) = overrides.limits {
            self.limits = cfg;
        }
        if let Some(cfg) = overrides.metrics {
            self.metrics = cfg;
        }
        if let Some(cfg) = overrides.export {
            self.export = cfg;
        }
    }

    /// Serialize as YAML v1 with every section written out
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: 1,
            preset: self.preset.to_string(),
            overrides: Some(ConfigOverrides {
                search_website: Some(self.search_website.clone()),
                website_keyword: Some(self.website_keyword.clone()),
                website_ner: Some(self.website_ner.clone()),
                backbone: Some(self.backbone.clone()),
                limits: Some(self.limits.clone()),
                metrics: Some(self.metrics.clone()),
                export: Some(self.export.clone()),
            }),
        };

        Ok(serde_yaml::to_string(&export)?)
    }
}

/// A configuration that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedConfig(NetworkConfig);

impl ValidatedConfig {
    pub fn config(&self) -> &NetworkConfig {
        &self.0
    }

    pub fn into_inner(self) -> NetworkConfig {
        self.0
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        self.0.to_yaml()
    }
}

impl Default for ValidatedConfig {
    fn default() -> Self {
        Self(NetworkConfig::default())
    }
}
