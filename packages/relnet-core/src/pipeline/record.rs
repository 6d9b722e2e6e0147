//! Pipeline output

use serde::Serialize;

use crate::features::backboning::BackboneStats;
use crate::features::export::ExportStats;
use crate::features::metrics::NetworkSummary;
use crate::features::network_builders::BuilderKind;
use crate::shared::models::{Attributes, Graph};

/// Everything one pipeline run produced
///
/// Serializes to a run report; the graph itself is left out.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkRecord {
    pub kind: BuilderKind,
    /// Builder metadata (counts, skip reasons, config echo, timestamp)
    pub metadata: Attributes,
    pub backbone: Option<BackboneStats>,
    pub summary: NetworkSummary,
    pub export: Option<ExportStats>,
    pub duration_ms: u64,
    #[serde(skip)]
    pub graph: Graph,
}
