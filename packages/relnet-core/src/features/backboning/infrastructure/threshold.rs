//! Absolute threshold

use crate::shared::models::Graph;

/// Keep edges whose value is at least `threshold`
pub(crate) fn select(graph: &Graph, threshold: f64, weight_attr: &str) -> Vec<bool> {
    graph
        .edges()
        .map(|e| e.value(weight_attr) >= threshold)
        .collect()
}
