//! Preset configurations
//!
//! Presets provide complete default configurations for common use cases.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ConfigError;

/// Configuration preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Keep everything: per-URL nodes, no top-K, no backbone
    Exploratory,

    /// Domain aggregation, top-50 terms per unit, disparity filter at 0.05
    Balanced,

    /// Top-20 terms with score/confidence cutoffs, disparity filter at 0.01
    Strict,
}

impl Preset {
    pub fn all() -> [Preset; 3] {
        [Preset::Exploratory, Preset::Balanced, Preset::Strict]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exploratory => "exploratory",
            Self::Balanced => "balanced",
            Self::Strict => "strict",
        }
    }

    /// Parse preset from string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        match s.to_lowercase().as_str() {
            "exploratory" => Ok(Self::Exploratory),
            "balanced" => Ok(Self::Balanced),
            "strict" => Ok(Self::Strict),
            _ => Err(ConfigError::unknown_preset(
                s,
                &["exploratory", "balanced", "strict"],
            )),
        }
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::Balanced
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_parse() {
        assert_eq!(Preset::parse("strict").unwrap(), Preset::Strict);
        assert_eq!(Preset::parse("BALANCED").unwrap(), Preset::Balanced);
        assert!(Preset::parse("fast").is_err());
    }

    #[test]
    fn test_preset_display_roundtrip() {
        for preset in Preset::all() {
            assert_eq!(Preset::parse(&preset.to_string()).unwrap(), preset);
        }
    }
}
