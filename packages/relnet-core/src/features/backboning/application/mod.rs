//! Backbone entry points
//!
//! Every entry point follows the same steps: validate, copy with the
//! `min_edge_weight` prefilter, select edges, drop isolated nodes.

use tracing::info;

use crate::errors::{NetworkError, Result};
use crate::features::backboning::domain::{BackboneAlgorithm, BackboneParams, BackboneStats};
use crate::features::backboning::infrastructure::{
    select_disparity, select_threshold, select_top_k,
};
use crate::shared::models::Graph;

/// Disparity filter with significance level `alpha`
pub fn disparity_filter(
    graph: &Graph,
    alpha: f64,
    min_edge_weight: Option<f64>,
) -> Result<(Graph, BackboneStats)> {
    let params = BackboneParams {
        alpha,
        min_edge_weight,
        ..BackboneParams::default()
    };
    run(graph, BackboneAlgorithm::DisparityFilter, &params)
}

/// Drop every edge whose `weight_attr` value is strictly below `threshold`
pub fn threshold(graph: &Graph, threshold: f64, weight_attr: &str) -> Result<(Graph, BackboneStats)> {
    let params = BackboneParams::default()
        .with_threshold(threshold)
        .with_weight_attr(weight_attr);
    run(graph, BackboneAlgorithm::Threshold, &params)
}

/// Keep the `k` edges with the highest `weight_attr` value
pub fn top_k(graph: &Graph, k: usize, weight_attr: &str) -> Result<(Graph, BackboneStats)> {
    let params = BackboneParams::default().with_k(k).with_weight_attr(weight_attr);
    run(graph, BackboneAlgorithm::TopK, &params)
}

/// Run an algorithm by name
///
/// Unknown names fail with `UnsupportedAlgorithm`; `threshold` without a
/// threshold and `top_k` without `k` fail with `MissingParameter`. Both checks
/// happen before the graph is copied.
pub fn dispatch(
    graph: &Graph,
    algorithm: &str,
    params: &BackboneParams,
) -> Result<(Graph, BackboneStats)> {
    let algorithm: BackboneAlgorithm = algorithm.parse()?;
    run(graph, algorithm, params)
}

fn run(
    graph: &Graph,
    algorithm: BackboneAlgorithm,
    params: &BackboneParams,
) -> Result<(Graph, BackboneStats)> {
    match algorithm {
        BackboneAlgorithm::Threshold if params.threshold.is_none() => {
            return Err(NetworkError::MissingParameter {
                algorithm: "threshold",
                parameter: "threshold",
            });
        }
        BackboneAlgorithm::TopK if params.k.is_none() => {
            return Err(NetworkError::MissingParameter {
                algorithm: "top_k",
                parameter: "k",
            });
        }
        _ => {}
    }
    params.validate(algorithm)?;

    let working = match params.min_edge_weight {
        Some(min) => graph.filtered(|_, _| true, |_, e| e.weight >= min),
        None => graph.clone(),
    };

    let keep = match algorithm {
        BackboneAlgorithm::DisparityFilter => select_disparity(&working, params.alpha),
        BackboneAlgorithm::Threshold => select_threshold(
            &working,
            params.threshold.unwrap_or_default(),
            &params.weight_attr,
        ),
        BackboneAlgorithm::TopK => {
            select_top_k(&working, params.k.unwrap_or_default(), &params.weight_attr)
        }
    };

    let pruned = working
        .filtered(|_, _| true, |pos, _| keep[pos])
        .without_isolated_nodes();
    let stats = BackboneStats::new(algorithm, graph, &pruned, params.echo(algorithm));

    info!(
        algorithm = %algorithm,
        original_edges = stats.original_edges,
        result_edges = stats.result_edges,
        retention = stats.edge_retention_rate,
        "backbone extracted"
    );

    Ok((pruned, stats))
}
