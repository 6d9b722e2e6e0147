//! Configuration system
//!
//! Three levels, from simplest to most explicit:
//! - Preset: `NetworkConfig::preset(Preset::Balanced)`
//! - Section override: `.backbone(|b| b.alpha = 0.01)`
//! - Versioned YAML: `NetworkConfig::from_yaml("network.yaml")`
//!
//! # Examples
//!
//! ```rust,ignore
//! use relnet_core::config::{NetworkConfig, Preset};
//!
//! let config = NetworkConfig::preset(Preset::Strict)
//!     .website_ner(|n| n.entity_labels = vec!["ORG".into()])
//!     .build()?;
//! ```

pub mod error;
pub mod io;
pub mod network_config;
pub mod preset;
pub mod stage_configs;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigExportV1, ConfigOverrides};
pub use network_config::{NetworkConfig, ValidatedConfig};
pub use preset::Preset;
pub use stage_configs::{
    BackboneConfig, ExportConfig, LimitsConfig, MetricsConfig, SearchWebsiteConfig, WeightRange,
    WebsiteKeywordConfig, WebsiteNerConfig,
};
pub use validation::Validatable;
