//! Backboning integration and property tests

mod common;

use proptest::prelude::*;
use relnet_core::features::backboning::{
    disparity_filter, disparity_scores, dispatch, threshold, top_k, BackboneAlgorithm,
    BackboneParams,
};
use relnet_core::attrs;
use relnet_core::shared::models::{Graph, NodeType};
use relnet_core::NetworkError;

#[test]
fn disparity_two_edge_star() {
    let g = common::star_a_b_c();

    let scores = disparity_scores(&g);
    let from_a: Vec<_> = scores.iter().filter(|s| s.endpoint == "A").collect();
    assert_eq!(from_a.len(), 2);
    assert!((from_a[0].alpha - 1.0 / 11.0).abs() < 1e-4);
    assert!((from_a[1].alpha - 10.0 / 11.0).abs() < 1e-4);

    // leaves have a single edge and never vote for removal
    assert!(scores.iter().filter(|s| s.endpoint != "A").all(|s| s.alpha == 0.0));

    let (pruned, stats) = disparity_filter(&g, 0.05, None).unwrap();
    assert_eq!(pruned.edge_count(), 0);
    assert_eq!(pruned.node_count(), 0);
    assert_eq!(stats.edges_removed, 2);
    assert_eq!(stats.nodes_removed, 3);
    assert_eq!(stats.edge_retention_rate, 0.0);
}

#[test]
fn disparity_keeps_dominant_edge_at_loose_alpha() {
    let g = common::star_a_b_c();
    let (pruned, _) = disparity_filter(&g, 0.5, None).unwrap();

    assert_eq!(pruned.edge_count(), 1);
    assert!(pruned.edge("A", "B").is_some());
    assert!(!pruned.contains_node("C"));
}

/// Queries `q` and `p` pointing at websites: q→a (10), q→b (1), p→a (3)
fn directed_fan_out() -> Graph {
    let mut g = Graph::new(true);
    for id in ["q", "p"] {
        g.add_node(id, NodeType::Query, id, attrs!()).unwrap();
    }
    for id in ["a", "b"] {
        g.add_node(id, NodeType::Website, id, attrs!()).unwrap();
    }
    g.add_edge("q", "a", 10.0, attrs!()).unwrap();
    g.add_edge("q", "b", 1.0, attrs!()).unwrap();
    g.add_edge("p", "a", 3.0, attrs!()).unwrap();
    g
}

#[test]
fn directed_disparity_votes_from_source_only() {
    let g = directed_fan_out();

    let scores = disparity_scores(&g);
    let endpoints: Vec<&str> = scores.iter().map(|s| s.endpoint.as_str()).collect();
    assert_eq!(endpoints, vec!["q", "q", "p"]);
    assert!((scores[0].alpha - 1.0 / 11.0).abs() < 1e-12);
    assert!((scores[1].alpha - 10.0 / 11.0).abs() < 1e-12);
    assert_eq!(scores[2].degree, 1);
    assert_eq!(scores[2].alpha, 0.0);

    // `a` has in-degree 2 but never judges p→a
    let (pruned, stats) = disparity_filter(&g, 0.5, None).unwrap();
    assert!(pruned.is_directed());
    assert_eq!(pruned.edge_count(), 2);
    assert!(pruned.edge("q", "a").is_some());
    assert!(pruned.edge("p", "a").is_some());
    assert!(!pruned.contains_node("b"));
    assert!((stats.edge_retention_rate - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn undirected_copy_lets_targets_vote() {
    let directed = directed_fan_out();
    let mut g = Graph::new(false);
    for node in directed.nodes() {
        g.add_node(&node.id, node.node_type, node.label.clone(), attrs!()).unwrap();
    }
    for edge in directed.edges() {
        g.add_edge(&edge.source, &edge.target, edge.weight, attrs!()).unwrap();
    }

    // `a` now sees p-a as 3/13 of its strength and votes it out
    let (pruned, _) = disparity_filter(&g, 0.5, None).unwrap();
    assert_eq!(pruned.edge_count(), 1);
    assert!(pruned.edge("q", "a").is_some());
}

#[test]
fn min_edge_weight_prefilters() {
    let g = common::star_a_b_c();
    let (pruned, stats) = disparity_filter(&g, 0.05, Some(5.0)).unwrap();

    // only A-B survives the prefilter, and A now has degree 1
    assert_eq!(pruned.edge_count(), 1);
    assert_eq!(stats.original_edges, 2);
    assert_eq!(stats.result_edges, 1);
}

#[test]
fn dispatch_rejects_unknown_and_incomplete_requests() {
    let g = common::star_a_b_c();
    let params = BackboneParams::default();

    assert!(matches!(
        dispatch(&g, "louvain", &params),
        Err(NetworkError::UnsupportedAlgorithm(name)) if name == "louvain"
    ));
    assert!(matches!(
        dispatch(&g, "threshold", &params),
        Err(NetworkError::MissingParameter { parameter: "threshold", .. })
    ));
    assert!(matches!(
        dispatch(&g, "top_k", &params),
        Err(NetworkError::MissingParameter { parameter: "k", .. })
    ));
    assert!(matches!(
        dispatch(&g, "disparity_filter", &params.clone().with_alpha(1.5)),
        Err(NetworkError::InvalidParameter(_))
    ));
}

#[test]
fn dispatch_records_parameters() {
    let g = common::star_a_b_c();
    let (_, stats) = dispatch(&g, "threshold", &BackboneParams::default().with_threshold(2.0))
        .unwrap();

    assert_eq!(stats.algorithm, BackboneAlgorithm::Threshold);
    assert_eq!(stats.parameters["threshold"], 2.0);
    assert_eq!(stats.result_edges, 1);
}

#[test]
fn dispatch_applies_min_edge_weight_before_top_k() {
    let g = common::star_a_b_c();
    let params = BackboneParams::default().with_k(2).with_min_edge_weight(5.0);
    let (pruned, stats) = dispatch(&g, "top_k", &params).unwrap();

    assert_eq!(pruned.edge_count(), 1);
    assert!(!pruned.contains_node("C"));
    assert_eq!(stats.parameters["min_edge_weight"], 5.0);
    assert_eq!(stats.parameters["k"], 2);
}

#[test]
fn threshold_on_missing_attribute_drops_everything() {
    let g = common::star_a_b_c();
    let (pruned, _) = threshold(&g, 0.5, "pmi").unwrap();
    assert!(pruned.is_empty());
}

#[test]
fn empty_graph_is_valid_input() {
    let g = common::bipartite_from_weights(&[]);
    let (pruned, stats) = top_k(&g, 3, "weight").unwrap();
    assert!(pruned.is_empty());
    assert_eq!(stats.edge_retention_rate, 0.0);
}

fn weight_matrix() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (1usize..5, 1usize..5).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::collection::vec(0.0f64..100.0, cols), rows)
    })
}

proptest! {
    #[test]
    fn prop_threshold_monotonic(weights in weight_matrix(), a in 0.0f64..100.0, b in 0.0f64..100.0) {
        let g = common::bipartite_from_weights(&weights);
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        let (loose, _) = threshold(&g, low, "weight").unwrap();
        let (strict, _) = threshold(&g, high, "weight").unwrap();
        prop_assert!(strict.edge_count() <= loose.edge_count());
        for edge in strict.edges() {
            prop_assert!(loose.edge(&edge.source, &edge.target).is_some());
        }
    }

    #[test]
    fn prop_top_k_bounded(weights in weight_matrix(), k in 1usize..30) {
        let g = common::bipartite_from_weights(&weights);
        let (pruned, _) = top_k(&g, k, "weight").unwrap();

        prop_assert!(pruned.edge_count() <= k);
        if k >= g.edge_count() {
            prop_assert_eq!(pruned.edges().collect::<Vec<_>>(), g.edges().collect::<Vec<_>>());
        }
    }

    #[test]
    fn prop_retention_rate_in_unit_interval(weights in weight_matrix(), alpha in 0.001f64..1.0) {
        let g = common::bipartite_from_weights(&weights);
        let (_, stats) = disparity_filter(&g, alpha, None).unwrap();

        prop_assert!((0.0..=1.0).contains(&stats.edge_retention_rate));
        prop_assert_eq!(stats.original_edges - stats.edges_removed, stats.result_edges);
    }

    #[test]
    fn prop_disparity_deterministic(weights in weight_matrix(), alpha in 0.001f64..1.0) {
        let g = common::bipartite_from_weights(&weights);
        let (first, _) = disparity_filter(&g, alpha, None).unwrap();
        let (second, _) = disparity_filter(&g, alpha, None).unwrap();

        prop_assert_eq!(
            first.edges().collect::<Vec<_>>(),
            second.edges().collect::<Vec<_>>()
        );
    }
}
