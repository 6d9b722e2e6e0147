//! Export integration tests

mod common;

use pretty_assertions::assert_eq;
use relnet_core::attrs;
use relnet_core::features::export::{export, export_as, read_gexf, read_node_link_json, ExportFormat};
use relnet_core::features::network_builders::{NetworkBuilder, SearchWebsiteBuilder};
use relnet_core::shared::models::{Graph, NodeType};
use relnet_core::NetworkError;
use std::fs;
use tempfile::TempDir;

fn graph_with_nulls() -> Graph {
    let mut g = Graph::new(false);
    g.set_metadata("network_type", "website_keyword");
    g.set_metadata("note", Option::<String>::None);
    g.add_node(
        "website_a.com",
        NodeType::Website,
        "a.com",
        attrs! { "domain" => "a.com", "title" => Option::<String>::None },
    )
    .unwrap();
    g.add_node("keyword_climate", NodeType::Keyword, "climate", attrs! { "lemma" => "climate" })
        .unwrap();
    g.add_edge(
        "website_a.com",
        "keyword_climate",
        0.4,
        attrs! { "frequency" => 6, "tfidf" => 0.4, "language" => Option::<String>::None },
    )
    .unwrap();
    g
}

#[test]
fn gexf_round_trip_drops_null_attributes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("net.gexf");
    let stats = export(&graph_with_nulls(), &path, "gexf").unwrap();
    assert_eq!(stats.node_count, 2);
    assert_eq!(stats.edge_count, 1);

    let back = read_gexf(&path).unwrap();
    let site = back.node("website_a.com").unwrap();
    assert_eq!(site.node_type, NodeType::Website);
    assert_eq!(site.attrs["domain"], "a.com");
    assert!(!site.attrs.contains_key("title"));
    assert_eq!(back.node("keyword_climate").unwrap().node_type, NodeType::Keyword);

    let edge = back.edge("website_a.com", "keyword_climate").unwrap();
    assert_eq!(edge.weight, 0.4);
    assert_eq!(edge.attrs["frequency"], 6);
    assert!(!edge.attrs.contains_key("language"));
    assert!(!back.is_directed());
}

#[test]
fn gexf_round_trip_keeps_ints_in_mixed_columns() {
    let mut g = Graph::new(false);
    g.add_node("website_a.com", NodeType::Website, "a.com", attrs! { "score" => 1 })
        .unwrap();
    g.add_node("keyword_tax", NodeType::Keyword, "tax", attrs! { "score" => 2.5 })
        .unwrap();
    g.add_edge("website_a.com", "keyword_tax", 1.0, attrs!()).unwrap();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mixed.gexf");
    export(&g, &path, "gexf").unwrap();
    assert!(fs::read_to_string(&path).unwrap().contains("type=\"double\""));

    let back = read_gexf(&path).unwrap();
    let int_score = &back.node("website_a.com").unwrap().attrs["score"];
    assert!(int_score.is_i64());
    assert_eq!(*int_score, 1);
    assert_eq!(back.node("keyword_tax").unwrap().attrs["score"], 2.5);
}

#[test]
fn gexf_declares_graph_mode() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("net.gexf");
    export(&graph_with_nulls(), &path, "GEXF").unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("http://www.gexf.net/1.2draft"));
    assert!(text.contains("defaultedgetype=\"undirected\""));
    assert!(text.contains("title=\"node_type\""));
}

#[test]
fn csv_and_edgelist_are_three_columns() {
    let dir = TempDir::new().unwrap();
    let g = graph_with_nulls();

    let csv = dir.path().join("net.csv");
    export(&g, &csv, "csv").unwrap();
    assert_eq!(
        fs::read_to_string(&csv).unwrap(),
        "Source,Target,Weight\nwebsite_a.com,keyword_climate,0.4\n"
    );

    let edgelist = dir.path().join("net.txt");
    export(&g, &edgelist, "edgelist").unwrap();
    assert_eq!(
        fs::read_to_string(&edgelist).unwrap(),
        "website_a.com\tkeyword_climate\t0.4\n"
    );
}

#[test]
fn graphml_keeps_attributes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("net.graphml");
    export_as(&graph_with_nulls(), &path, ExportFormat::GraphMl).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("attr.name=\"domain\""));
    assert!(text.contains("attr.name=\"tfidf\""));
    assert!(!text.contains("attr.name=\"title\""));
    assert!(!text.contains("attr.name=\"note\""));
}

#[test]
fn node_link_round_trip_of_built_network() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("net.json");
    let out = SearchWebsiteBuilder::default()
        .build(&[1], &common::search_rows())
        .unwrap();
    export(&out.graph, &path, "json").unwrap();

    let doc: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(doc["directed"], false);
    assert_eq!(doc["multigraph"], false);
    assert_eq!(doc["graph"]["network_type"], "search_website");

    let back = read_node_link_json(&path).unwrap();
    assert_eq!(back.node_count(), out.graph.node_count());
    assert_eq!(back.edge_count(), out.graph.edge_count());
    for edge in out.graph.edges() {
        assert_eq!(back.edge(&edge.source, &edge.target).unwrap().weight, edge.weight);
    }
}

#[test]
fn unknown_format_is_rejected_before_writing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("net.dot");

    let err = export(&graph_with_nulls(), &path, "dot").unwrap_err();
    assert!(matches!(err, NetworkError::UnsupportedFormat(ref f) if f == "dot"));
    assert!(!path.exists());
}
