//! Centrality measures
//!
//! Betweenness and closeness run one BFS per source node. Above
//! `PARALLEL_THRESHOLD` nodes the sources are spread over rayon; partial
//! results are collected in source order and summed sequentially, so the
//! output is bit-identical to the sequential run.
//!
//! Eigenvector centrality is a power iteration on `A + I` (the shift keeps
//! bipartite graphs from oscillating). If it does not converge within the
//! iteration budget the measure is dropped with a warning.

use rayon::prelude::*;
use std::collections::VecDeque;
use tracing::{debug, warn};

use crate::shared::constants::centrality::PARALLEL_THRESHOLD;
use crate::shared::models::Graph;

/// Adjacency by node position, sorted and deduplicated
///
/// Undirected edges appear in both lists. With `reverse`, directed edges are
/// stored target → source.
fn adjacency(graph: &Graph, reverse: bool) -> Vec<Vec<usize>> {
    let mut adj = vec![Vec::new(); graph.node_count()];
    for e in 0..graph.edge_count() {
        let (s, t) = graph.edge_endpoints_at(e);
        if !graph.is_directed() {
            adj[s].push(t);
            adj[t].push(s);
        } else if reverse {
            adj[t].push(s);
        } else {
            adj[s].push(t);
        }
    }
    for list in &mut adj {
        list.sort_unstable();
        list.dedup();
    }
    adj
}

/// Run `per_source` for every node, in parallel for large graphs
fn per_source<T, F>(n: usize, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync + Send,
{
    if n >= PARALLEL_THRESHOLD {
        (0..n).into_par_iter().map(f).collect()
    } else {
        (0..n).map(f).collect()
    }
}

/// `degree / (n - 1)`; a lone node scores 1
pub fn degree_centrality(graph: &Graph) -> Vec<f64> {
    let n = graph.node_count();
    if n <= 1 {
        return vec![1.0; n];
    }
    let scale = 1.0 / (n - 1) as f64;
    (0..n)
        .map(|pos| graph.incident_edge_positions(pos, false).len() as f64 * scale)
        .collect()
}

/// Normalized shortest-path betweenness (Brandes, unweighted hops)
pub fn betweenness_centrality(graph: &Graph) -> Vec<f64> {
    let n = graph.node_count();
    let adj = adjacency(graph, false);

    let partials: Vec<Vec<f64>> = per_source(n, |s| brandes_from(&adj, s));

    let mut scores = vec![0.0; n];
    for partial in partials {
        for (total, value) in scores.iter_mut().zip(partial) {
            *total += value;
        }
    }

    // Undirected pairs are counted from both ends; the normalization below
    // already accounts for that.
    if n > 2 {
        let scale = 1.0 / ((n - 1) * (n - 2)) as f64;
        for v in &mut scores {
            *v *= scale;
        }
    }
    scores
}

/// Dependency of every node on paths from `source`
fn brandes_from(adj: &[Vec<usize>], source: usize) -> Vec<f64> {
    let n = adj.len();
    let mut stack = Vec::with_capacity(n);
    let mut preds: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut sigma = vec![0.0f64; n];
    let mut dist = vec![-1i64; n];
    sigma[source] = 1.0;
    dist[source] = 0;

    let mut queue = VecDeque::new();
    queue.push_back(source);
    while let Some(v) = queue.pop_front() {
        stack.push(v);
        for &w in &adj[v] {
            if dist[w] < 0 {
                dist[w] = dist[v] + 1;
                queue.push_back(w);
            }
            if dist[w] == dist[v] + 1 {
                sigma[w] += sigma[v];
                preds[w].push(v);
            }
        }
    }

    let mut delta = vec![0.0f64; n];
    while let Some(w) = stack.pop() {
        for &v in &preds[w] {
            delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
        }
    }
    delta[source] = 0.0;
    delta
}

/// Closeness with the Wasserman–Faust correction for disconnected graphs
///
/// For directed graphs distances are measured towards the node.
pub fn closeness_centrality(graph: &Graph) -> Vec<f64> {
    let n = graph.node_count();
    let adj = adjacency(graph, true);

    per_source(n, |u| {
        let (total, reached) = bfs_distance_sum(&adj, u);
        if total == 0 || n <= 1 {
            return 0.0;
        }
        let r = (reached - 1) as f64;
        (r / total as f64) * (r / (n - 1) as f64)
    })
}

/// Sum of hop distances from `source` and number of reached nodes (itself
/// included)
fn bfs_distance_sum(adj: &[Vec<usize>], source: usize) -> (usize, usize) {
    let mut dist = vec![usize::MAX; adj.len()];
    dist[source] = 0;
    let mut queue = VecDeque::new();
    queue.push_back(source);
    let (mut total, mut reached) = (0, 0);

    while let Some(v) = queue.pop_front() {
        total += dist[v];
        reached += 1;
        for &w in &adj[v] {
            if dist[w] == usize::MAX {
                dist[w] = dist[v] + 1;
                queue.push_back(w);
            }
        }
    }
    (total, reached)
}

/// Weighted eigenvector centrality, L2-normalized
///
/// Returns `None` when the iteration does not converge; the caller decides
/// whether that matters.
pub fn eigenvector_centrality(
    graph: &Graph,
    max_iterations: usize,
    tolerance: f64,
) -> Option<Vec<f64>> {
    let n = graph.node_count();
    if n == 0 {
        return Some(Vec::new());
    }

    let edges: Vec<(usize, usize, f64)> = (0..graph.edge_count())
        .map(|e| {
            let (s, t) = graph.edge_endpoints_at(e);
            (s, t, graph.edge_at(e).weight)
        })
        .collect();

    let mut x = vec![1.0 / n as f64; n];
    for iteration in 0..max_iterations {
        let last = x.clone();
        for &(s, t, w) in &edges {
            x[t] += last[s] * w;
            if !graph.is_directed() {
                x[s] += last[t] * w;
            }
        }

        let norm = x.iter().map(|v| v * v).sum::<f64>().sqrt();
        let norm = if norm == 0.0 { 1.0 } else { norm };
        for v in &mut x {
            *v /= norm;
        }

        let delta: f64 = x.iter().zip(&last).map(|(a, b)| (a - b).abs()).sum();
        if delta < n as f64 * tolerance {
            debug!("eigenvector centrality converged in {} iterations", iteration + 1);
            return Some(x);
        }
    }

    warn!(
        max_iterations,
        nodes = n,
        "eigenvector centrality did not converge; measure omitted"
    );
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;
    use crate::shared::models::NodeType;

    /// w1 - k1 - w2 - k2
    fn path() -> Graph {
        let mut g = Graph::new(false);
        g.add_node("w1", NodeType::Website, "w1", attrs!()).unwrap();
        g.add_node("k1", NodeType::Keyword, "k1", attrs!()).unwrap();
        g.add_node("w2", NodeType::Website, "w2", attrs!()).unwrap();
        g.add_node("k2", NodeType::Keyword, "k2", attrs!()).unwrap();
        g.add_edge("w1", "k1", 1.0, attrs!()).unwrap();
        g.add_edge("w2", "k1", 1.0, attrs!()).unwrap();
        g.add_edge("w2", "k2", 1.0, attrs!()).unwrap();
        g
    }

    #[test]
    fn test_degree_centrality() {
        let c = degree_centrality(&path());
        assert_eq!(c, vec![1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0, 1.0 / 3.0]);
    }

    #[test]
    fn test_betweenness_on_path() {
        // Inner nodes each sit on 2 of the 3 unordered pairs not involving them.
        let b = betweenness_centrality(&path());
        assert_eq!(b[0], 0.0);
        assert!((b[1] - 2.0 / 3.0).abs() < 1e-12);
        assert!((b[2] - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(b[3], 0.0);
    }

    #[test]
    fn test_closeness_on_path() {
        let c = closeness_centrality(&path());
        // w1: distances 1,2,3 → 3/6
        assert!((c[0] - 0.5).abs() < 1e-12);
        // k1: distances 1,1,2 → 3/4
        assert!((c[1] - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_closeness_disconnected_correction() {
        let mut g = path();
        g.add_node("lonely", NodeType::Keyword, "lonely", attrs!()).unwrap();
        let c = closeness_centrality(&g);
        assert_eq!(c[4], 0.0);
        // k1 reaches 3 of 4 other nodes: (3/4) * (3/4)
        assert!((c[1] - 0.5625).abs() < 1e-12);
    }

    #[test]
    fn test_eigenvector_symmetric() {
        let e = eigenvector_centrality(&path(), 100, 1e-6).unwrap();
        assert!((e[0] - e[3]).abs() < 1e-6);
        assert!((e[1] - e[2]).abs() < 1e-6);
        assert!(e[1] > e[0]);
    }

    #[test]
    fn test_eigenvector_non_convergence_is_none() {
        assert!(eigenvector_centrality(&path(), 1, 1e-12).is_none());
    }

    #[test]
    fn test_empty_graph() {
        let g = Graph::new(false);
        assert!(betweenness_centrality(&g).is_empty());
        assert!(closeness_centrality(&g).is_empty());
        assert_eq!(eigenvector_centrality(&g, 10, 1e-6), Some(Vec::new()));
    }
}
