//! Configuration validation
//!
//! Each YAML section validates itself; `NetworkConfig::build` runs them in
//! declaration order and stops at the first failure.

use super::error::ConfigResult;
use tracing::warn;

/// A configuration section that can check its own invariants
pub trait Validatable {
    fn validate(&self) -> ConfigResult<()>;

    /// Section key as it appears under `overrides:` in YAML
    fn section(&self) -> &'static str;
}

pub(crate) fn validate_sections(sections: &[&dyn Validatable]) -> ConfigResult<()> {
    for section in sections {
        if let Err(err) = section.validate() {
            warn!(section = section.section(), error = %err, "invalid configuration section");
            return Err(err);
        }
    }
    Ok(())
}
