//! Disparity filter
//!
//! ```text
//! p     = w / W            W = strength of the node
//! α_ij  = (1 - p)^(k - 1)  k = degree of the node (out-degree if directed)
//! α_ij  = 0                when k <= 1
//! ```
//!
//! Every node votes on each of its edges; an edge with `α >= alpha` gets a
//! removal vote. Votes from all nodes are collected first and removal happens
//! afterwards, so an undirected edge survives only if both endpoints judge it
//! significant.

use serde::{Deserialize, Serialize};

use crate::shared::models::Graph;

/// One endpoint's view of one edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisparityScore {
    pub edge: usize,
    pub source: String,
    pub target: String,
    /// Node whose perspective this is
    pub endpoint: String,
    pub degree: usize,
    pub strength: f64,
    pub share: f64,
    pub alpha: f64,
}

/// Significance level of an edge holding `weight` of a node's `strength`
///
/// A zero-strength node with several edges has no meaningful shares; every
/// edge gets `α = 1` and so always draws a removal vote.
pub(crate) fn edge_alpha(weight: f64, strength: f64, degree: usize) -> (f64, f64) {
    if degree <= 1 {
        let share = if strength > 0.0 { weight / strength } else { 1.0 };
        return (share, 0.0);
    }
    if strength <= 0.0 {
        return (0.0, 1.0);
    }
    let share = weight / strength;
    (share, (1.0 - share).powi(degree as i32 - 1))
}

/// Every (node, incident edge) score in node then edge order
pub fn disparity_scores(graph: &Graph) -> Vec<DisparityScore> {
    let outgoing_only = graph.is_directed();
    let mut scores = Vec::new();

    for pos in 0..graph.node_count() {
        let edges = graph.incident_edge_positions(pos, outgoing_only);
        let degree = edges.len();
        let strength: f64 = edges.iter().map(|&e| graph.edge_at(e).weight).sum();
        let node = &graph.node_at(pos).id;

        for e in edges {
            let edge = graph.edge_at(e);
            let (share, alpha) = edge_alpha(edge.weight, strength, degree);
            scores.push(DisparityScore {
                edge: e,
                source: edge.source.clone(),
                target: edge.target.clone(),
                endpoint: node.clone(),
                degree,
                strength,
                share,
                alpha,
            });
        }
    }
    scores
}

/// Keep-mask: false where any endpoint voted for removal
pub(crate) fn select(graph: &Graph, alpha: f64) -> Vec<bool> {
    let mut keep = vec![true; graph.edge_count()];
    for score in disparity_scores(graph) {
        if score.alpha >= alpha {
            keep[score.edge] = false;
        }
    }
    keep
}
