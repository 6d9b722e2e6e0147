//! Global top-k

use crate::shared::models::Graph;

/// Keep the `k` highest-valued edges; ties keep insertion order
pub(crate) fn select(graph: &Graph, k: usize, weight_attr: &str) -> Vec<bool> {
    let values: Vec<f64> = graph.edges().map(|e| e.value(weight_attr)).collect();
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[b].total_cmp(&values[a]));

    let mut keep = vec![false; values.len()];
    for &pos in order.iter().take(k) {
        keep[pos] = true;
    }
    keep
}
