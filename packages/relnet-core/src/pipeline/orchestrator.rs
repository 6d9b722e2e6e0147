//! Pipeline orchestrator
//!
//! Coordinates the features into one network run.

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::limits::check_limits;
use super::record::NetworkRecord;
use super::request::{BackboneChoice, NetworkRequest};
use crate::config::{NetworkConfig, ValidatedConfig};
use crate::errors::Result;
use crate::features::backboning::{dispatch, BackboneParams, BackboneStats};
use crate::features::export::{export_as, ExportFormat};
use crate::features::metrics::compute_summary;
use crate::features::network_builders::NetworkBuildUseCase;
use crate::shared::models::Graph;
use relnet_source::SignalSource;

/// Runs fetch → build → limits → backbone → metrics → export
///
/// Holds no per-run state, so independent `generate` calls may run
/// concurrently against the same pipeline.
pub struct NetworkPipeline<S: SignalSource> {
    builder: NetworkBuildUseCase<S>,
}

impl<S: SignalSource> NetworkPipeline<S> {
    pub fn new(source: Arc<S>, config: ValidatedConfig) -> Self {
        Self {
            builder: NetworkBuildUseCase::new(source, config.into_inner()),
        }
    }

    pub fn config(&self) -> &NetworkConfig {
        self.builder.config()
    }

    pub async fn generate(&self, request: NetworkRequest) -> Result<NetworkRecord> {
        let start = Instant::now();
        let config = self.config();
        info!(
            network_type = %request.kind,
            sessions = request.session_ids.len(),
            "network pipeline started"
        );

        // Resolve the export format up front so a bad name fails before any fetch
        let export_format = match (&request.export_path, request.export_format) {
            (None, _) => None,
            (Some(_), Some(format)) => Some(format),
            (Some(_), None) => Some(config.export.format.parse::<ExportFormat>()?),
        };

        let output = self.builder.build(request.kind, &request.session_ids).await?;
        check_limits(&output.graph, &config.limits)?;
        let metadata = output.metadata;
        let mut graph = output.graph;

        let backbone = match self.backbone_step(&request.backbone) {
            Some((algorithm, params)) => {
                let (pruned, stats) = dispatch(&graph, &algorithm, &params)?;
                graph = pruned;
                graph.set_metadata("backbone", serde_json::to_value(&stats)?);
                Some(stats)
            }
            None => {
                debug!("backbone step skipped");
                None
            }
        };

        let summary = compute_summary(&graph, &config.metrics);

        if let Some(range) = &config.export.normalize {
            graph.normalize_weights(range.min, range.max)?;
        }

        let export = match (&request.export_path, export_format) {
            (Some(path), Some(format)) => Some(export_as(&graph, path, format)?),
            _ => None,
        };

        let duration_ms = start.elapsed().as_millis() as u64;
        info!(
            network_type = %request.kind,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            duration_ms,
            "network pipeline finished"
        );

        Ok(NetworkRecord {
            kind: request.kind,
            metadata,
            backbone,
            summary,
            export,
            duration_ms,
            graph,
        })
    }

    fn backbone_step(&self, choice: &BackboneChoice) -> Option<(String, BackboneParams)> {
        match choice {
            BackboneChoice::Skip => None,
            BackboneChoice::Run { algorithm, params } => Some((algorithm.clone(), params.clone())),
            BackboneChoice::FromConfig => {
                let backbone = &self.config().backbone;
                backbone
                    .algorithm
                    .clone()
                    .map(|algorithm| (algorithm, BackboneParams::from(backbone)))
            }
        }
    }
}

/// Backbone a graph outside a pipeline run, using a config section
pub fn apply_configured_backbone(
    graph: &Graph,
    config: &NetworkConfig,
) -> Result<Option<(Graph, BackboneStats)>> {
    match &config.backbone.algorithm {
        Some(algorithm) => {
            dispatch(graph, algorithm, &BackboneParams::from(&config.backbone)).map(Some)
        }
        None => Ok(None),
    }
}
