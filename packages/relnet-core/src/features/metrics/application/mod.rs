//! Metrics use case

use std::collections::BTreeMap;
use tracing::debug;

use crate::config::MetricsConfig;
use crate::features::metrics::domain::{CentralityScores, NetworkSummary, RankedNode, TopNode};
use crate::features::metrics::infrastructure::{
    betweenness_centrality, closeness_centrality, component_stats, degree_centrality,
    degree_stats, density, eigenvector_centrality, node_type_histogram, weight_stats,
};
use crate::shared::constants::centrality::{EIGENVECTOR_MAX_ITERATIONS, EIGENVECTOR_TOLERANCE};
use crate::shared::models::Graph;

/// Centrality measures selected by `config`
pub fn centrality_scores(graph: &Graph, config: &MetricsConfig) -> CentralityScores {
    CentralityScores {
        degree: degree_centrality(graph),
        betweenness: config.betweenness.then(|| betweenness_centrality(graph)),
        closeness: config.closeness.then(|| closeness_centrality(graph)),
        eigenvector: if config.eigenvector {
            eigenvector_centrality(graph, EIGENVECTOR_MAX_ITERATIONS, EIGENVECTOR_TOLERANCE)
        } else {
            None
        },
    }
}

/// The `n` highest-degree nodes of every node type
///
/// Ties on degree go to the higher strength, then to the smaller id.
pub fn top_nodes(graph: &Graph, n: usize) -> BTreeMap<String, Vec<TopNode>> {
    let mut by_type: BTreeMap<String, Vec<TopNode>> = BTreeMap::new();
    for (pos, node) in graph.nodes().enumerate() {
        let edges = graph.incident_edge_positions(pos, false);
        by_type
            .entry(node.node_type.as_str().to_string())
            .or_default()
            .push(TopNode {
                id: node.id.clone(),
                label: node.label.clone(),
                degree: edges.len(),
                strength: edges.iter().map(|&e| graph.edge_at(e).weight).sum(),
            });
    }
    for nodes in by_type.values_mut() {
        nodes.sort_by(|a, b| {
            b.degree
                .cmp(&a.degree)
                .then(b.strength.total_cmp(&a.strength))
                .then_with(|| a.id.cmp(&b.id))
        });
        nodes.truncate(n);
    }
    by_type
}

fn ranked(graph: &Graph, scores: &[f64], n: usize) -> Vec<RankedNode> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .total_cmp(&scores[a])
            .then_with(|| graph.node_at(a).id.cmp(&graph.node_at(b).id))
    });
    order
        .into_iter()
        .take(n)
        .map(|pos| RankedNode {
            id: graph.node_at(pos).id.clone(),
            score: scores[pos],
        })
        .collect()
}

/// Full summary of a finished network
pub fn compute_summary(graph: &Graph, config: &MetricsConfig) -> NetworkSummary {
    let centrality = centrality_scores(graph, config);
    let centrality: BTreeMap<String, Vec<RankedNode>> = centrality
        .measures()
        .into_iter()
        .map(|(name, scores)| (name.to_string(), ranked(graph, scores, config.top_nodes)))
        .collect();

    let summary = NetworkSummary {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        directed: graph.is_directed(),
        density: density(graph),
        degree: degree_stats(graph),
        node_types: node_type_histogram(graph),
        components: component_stats(graph),
        weights: weight_stats(graph),
        centrality,
        top_nodes: top_nodes(graph, config.top_nodes),
    };
    debug!(
        nodes = summary.node_count,
        edges = summary.edge_count,
        density = summary.density,
        "metrics computed"
    );
    summary
}
