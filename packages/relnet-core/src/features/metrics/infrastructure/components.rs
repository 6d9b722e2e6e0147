//! Connected components

use petgraph::unionfind::UnionFind;

use crate::features::metrics::domain::ComponentStats;
use crate::shared::models::Graph;

/// Component count and largest component; `None` for directed graphs
pub fn component_stats(graph: &Graph) -> Option<ComponentStats> {
    if graph.is_directed() {
        return None;
    }
    let n = graph.node_count();
    if n == 0 {
        return Some(ComponentStats {
            count: 0,
            largest_size: 0,
            largest_fraction: 0.0,
        });
    }

    let mut uf = UnionFind::<usize>::new(n);
    for e in 0..graph.edge_count() {
        let (a, b) = graph.edge_endpoints_at(e);
        uf.union(a, b);
    }

    let mut sizes = vec![0usize; n];
    for label in uf.into_labeling() {
        sizes[label] += 1;
    }
    let count = sizes.iter().filter(|&&s| s > 0).count();
    let largest_size = sizes.iter().copied().max().unwrap_or(0);

    Some(ComponentStats {
        count,
        largest_size,
        largest_fraction: largest_size as f64 / n as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;
    use crate::shared::models::NodeType;

    #[test]
    fn test_two_components() {
        let mut g = Graph::new(false);
        for (id, t) in [
            ("w1", NodeType::Website),
            ("k1", NodeType::Keyword),
            ("k2", NodeType::Keyword),
            ("w2", NodeType::Website),
            ("k3", NodeType::Keyword),
        ] {
            g.add_node(id, t, id, attrs!()).unwrap();
        }
        g.add_edge("w1", "k1", 1.0, attrs!()).unwrap();
        g.add_edge("w1", "k2", 1.0, attrs!()).unwrap();
        g.add_edge("w2", "k3", 1.0, attrs!()).unwrap();

        let stats = component_stats(&g).unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.largest_size, 3);
        assert!((stats.largest_fraction - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_directed_is_none() {
        assert!(component_stats(&Graph::new(true)).is_none());
    }
}
