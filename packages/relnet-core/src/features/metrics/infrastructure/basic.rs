//! Counts, density, degree and weight statistics

use std::collections::BTreeMap;

use crate::features::metrics::domain::{DegreeStats, WeightStats};
use crate::shared::models::Graph;

/// Edge density
///
/// Undirected: `2|E| / (|V|(|V|-1))`. Directed: `|E| / (|V|(|V|-1))`.
/// Zero for fewer than two nodes.
pub fn density(graph: &Graph) -> f64 {
    let n = graph.node_count() as f64;
    if graph.node_count() < 2 {
        return 0.0;
    }
    let e = graph.edge_count() as f64;
    let possible = n * (n - 1.0);
    if graph.is_directed() {
        e / possible
    } else {
        2.0 * e / possible
    }
}

pub fn degree_stats(graph: &Graph) -> DegreeStats {
    if graph.node_count() == 0 {
        return DegreeStats::default();
    }
    let degrees: Vec<usize> = (0..graph.node_count())
        .map(|pos| graph.incident_edge_positions(pos, false).len())
        .collect();
    DegreeStats {
        min: degrees.iter().copied().min().unwrap_or(0),
        avg: degrees.iter().sum::<usize>() as f64 / degrees.len() as f64,
        max: degrees.iter().copied().max().unwrap_or(0),
    }
}

pub fn node_type_histogram(graph: &Graph) -> BTreeMap<String, usize> {
    let mut histogram = BTreeMap::new();
    for node in graph.nodes() {
        *histogram.entry(node.node_type.as_str().to_string()).or_insert(0) += 1;
    }
    histogram
}

pub fn weight_stats(graph: &Graph) -> WeightStats {
    if graph.edge_count() == 0 {
        return WeightStats::default();
    }
    let mut stats = WeightStats {
        min: f64::INFINITY,
        avg: 0.0,
        max: f64::NEG_INFINITY,
        sum: 0.0,
    };
    for edge in graph.edges() {
        stats.min = stats.min.min(edge.weight);
        stats.max = stats.max.max(edge.weight);
        stats.sum += edge.weight;
    }
    stats.avg = stats.sum / graph.edge_count() as f64;
    stats
}
