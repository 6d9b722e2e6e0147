/*
 * relnet - bipartite relevance networks
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Graph model, id helpers, constants
 * - features/    : Vertical slices (weighting → aggregation → builders → backboning → metrics → export)
 * - pipeline/    : Orchestration
 * - config/      : Presets, stage configs, YAML
 */

#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Configuration presets, stage configs and YAML IO
pub mod config;

/// Error types
pub mod errors;

/// Feature modules (vertical slices)
pub mod features;

/// Pipeline orchestration
pub mod pipeline;

#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{NetworkConfig, Preset, ValidatedConfig};
pub use errors::{NetworkError, Result};
pub use features::backboning::{BackboneAlgorithm, BackboneParams, BackboneStats};
pub use features::export::{export, read_gexf, read_node_link_json, ExportFormat, ExportStats};
pub use features::metrics::{compute_summary, NetworkSummary};
pub use features::network_builders::{BuildOutput, BuilderKind, NetworkBuildUseCase, NetworkBuilder};
pub use pipeline::{NetworkPipeline, NetworkRecord, NetworkRequest};
pub use shared::models::{Attributes, Edge, Graph, Node, NodeType};
