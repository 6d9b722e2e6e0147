//! Common test utilities for relnet-core
//!
//! Fixtures shared by the integration tests: small hand-built graphs and an
//! in-memory signal source covering all three row kinds.

#![allow(dead_code)]

use relnet_core::attrs;
use relnet_core::shared::models::{Graph, NodeType};
use relnet_source::{EntityRow, InMemorySignalSource, KeywordRow, SearchResultRow};

/// Website `A` with keywords `B` (weight 10) and `C` (weight 1)
pub fn star_a_b_c() -> Graph {
    let mut g = Graph::new(false);
    g.add_node("A", NodeType::Website, "A", attrs!()).unwrap();
    g.add_node("B", NodeType::Keyword, "B", attrs!()).unwrap();
    g.add_node("C", NodeType::Keyword, "C", attrs!()).unwrap();
    g.add_edge("A", "B", 10.0, attrs!()).unwrap();
    g.add_edge("A", "C", 1.0, attrs!()).unwrap();
    g
}

/// Complete bipartite website × keyword graph with the given weights
///
/// `weights[i][j]` is the edge between website `i` and keyword `j`.
pub fn bipartite_from_weights(weights: &[Vec<f64>]) -> Graph {
    let mut g = Graph::new(false);
    let keywords = weights.iter().map(Vec::len).max().unwrap_or(0);
    for i in 0..weights.len() {
        g.add_node(&format!("website_{}", i), NodeType::Website, format!("w{}", i), attrs!())
            .unwrap();
    }
    for j in 0..keywords {
        g.add_node(&format!("keyword_{}", j), NodeType::Keyword, format!("k{}", j), attrs!())
            .unwrap();
    }
    for (i, row) in weights.iter().enumerate() {
        for (j, &w) in row.iter().enumerate() {
            g.add_edge(&format!("website_{}", i), &format!("keyword_{}", j), w, attrs!())
                .unwrap();
        }
    }
    g
}

pub fn search_rows() -> Vec<SearchResultRow> {
    vec![
        SearchResultRow::new(1, 10, "climate policy", "https://news.org/a", 1).with_title("A"),
        SearchResultRow::new(1, 10, "climate policy", "https://blog.net/b", 2),
        SearchResultRow::new(1, 11, "carbon tax", "https://news.org/c", 1),
        SearchResultRow::new(1, 11, "carbon tax", "https://gov.eu/d", 4),
        SearchResultRow::new(2, 20, "heat pumps", "https://shop.de/e", 1),
    ]
}

pub fn keyword_rows() -> Vec<KeywordRow> {
    vec![
        KeywordRow::new(1, 100, "https://news.org/a", "climate", 4, 0.6).with_language("en"),
        KeywordRow::new(1, 101, "https://news.org/c", "climate", 2, 0.2).with_language("en"),
        KeywordRow::new(1, 101, "https://news.org/c", "tax", 3, 0.5).with_language("en"),
        KeywordRow::new(1, 102, "https://blog.net/b", "klima", 1, 0.9).with_language("de"),
    ]
}

pub fn entity_rows() -> Vec<EntityRow> {
    vec![
        EntityRow::new(1, 100, "https://news.org/a", "European Union", "ORG", 2, 0.9),
        EntityRow::new(1, 101, "https://news.org/c", "European Union", "ORG", 1, 0.7),
        EntityRow::new(1, 101, "https://news.org/c", "Brussels", "GPE", 1, 0.8),
        EntityRow::new(1, 102, "https://blog.net/b", "Apple", "ORG", 1, 0.95),
        EntityRow::new(1, 102, "https://blog.net/b", "Apple", "PRODUCT", 1, 0.6),
    ]
}

pub fn signal_source() -> InMemorySignalSource {
    InMemorySignalSource::new()
        .with_search_results(search_rows())
        .with_keywords(keyword_rows())
        .with_entities(entity_rows())
}
