//! Website → concept networks (not implemented)

use serde_json::Value;

use crate::errors::{NetworkError, Result};
use crate::features::network_builders::domain::{BuildOutput, BuilderKind, NetworkBuilder};
use relnet_source::SessionId;

/// Placeholder kept so the kind enum stays closed; always fails
#[derive(Debug, Clone, Copy, Default)]
pub struct WebsiteConceptBuilder;

impl NetworkBuilder for WebsiteConceptBuilder {
    type Row = ();

    fn kind(&self) -> BuilderKind {
        BuilderKind::WebsiteConcept
    }

    fn config_echo(&self) -> Value {
        Value::Null
    }

    fn build(&self, _session_ids: &[SessionId], _rows: &[()]) -> Result<BuildOutput> {
        Err(NetworkError::NotImplementedFeature(
            "website_concept networks are not implemented".to_string(),
        ))
    }
}
