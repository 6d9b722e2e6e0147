//! Node-link JSON (the layout d3 and networkx read)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::Write;

use crate::errors::{NetworkError, Result};
use crate::shared::models::{Attributes, Graph, NodeType};

#[derive(Debug, Serialize, Deserialize)]
struct NodeLinkDocument {
    directed: bool,
    #[serde(default)]
    multigraph: bool,
    #[serde(default)]
    graph: Attributes,
    nodes: Vec<NodeLinkNode>,
    #[serde(alias = "edges")]
    links: Vec<NodeLinkLink>,
}

#[derive(Debug, Serialize, Deserialize)]
struct NodeLinkNode {
    id: String,
    node_type: NodeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(flatten)]
    attrs: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize)]
struct NodeLinkLink {
    source: String,
    target: String,
    #[serde(default = "default_weight")]
    weight: f64,
    #[serde(flatten)]
    attrs: Map<String, Value>,
}

fn default_weight() -> f64 {
    1.0
}

pub fn write_node_link<W: Write>(graph: &Graph, mut out: W) -> Result<()> {
    let doc = NodeLinkDocument {
        directed: graph.is_directed(),
        multigraph: false,
        graph: graph.metadata().clone(),
        nodes: graph
            .nodes()
            .map(|n| NodeLinkNode {
                id: n.id.clone(),
                node_type: n.node_type,
                label: Some(n.label.clone()),
                attrs: reserved_free(&n.attrs, &["id", "node_type", "label"]),
            })
            .collect(),
        links: graph
            .edges()
            .map(|e| NodeLinkLink {
                source: e.source.clone(),
                target: e.target.clone(),
                weight: e.weight,
                attrs: reserved_free(&e.attrs, &["source", "target", "weight"]),
            })
            .collect(),
    };
    serde_json::to_writer_pretty(&mut out, &doc)?;
    out.flush()?;
    Ok(())
}

/// Attributes whose keys would collide with structural fields are dropped
fn reserved_free(attrs: &Attributes, reserved: &[&str]) -> Map<String, Value> {
    attrs
        .iter()
        .filter(|(k, _)| !reserved.contains(&k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

pub fn parse_node_link(content: &str) -> Result<Graph> {
    let doc: NodeLinkDocument = serde_json::from_str(content)?;
    if doc.multigraph {
        return Err(NetworkError::invalid_parameter(
            "multigraph node-link documents are not supported",
        ));
    }

    let mut graph = Graph::new(doc.directed);
    *graph.metadata_mut() = doc.graph;
    for node in doc.nodes {
        let label = node.label.unwrap_or_else(|| node.id.clone());
        graph.add_node(&node.id, node.node_type, label, node.attrs.into_iter().collect())?;
    }
    for link in doc.links {
        graph.add_edge(
            &link.source,
            &link.target,
            link.weight,
            link.attrs.into_iter().collect(),
        )?;
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_node_link_roundtrip_keeps_attrs() {
        let mut g = Graph::new(false);
        g.set_metadata("network_type", "website_ner");
        g.add_node("website_a.com", NodeType::Website, "a.com", attrs! { "domain" => "a.com" })
            .unwrap();
        g.add_node("entity_ORG_Acme", NodeType::Entity, "Acme", attrs! { "entity_label" => "ORG" })
            .unwrap();
        g.add_edge("website_a.com", "entity_ORG_Acme", 2.4, attrs! { "frequency" => 3 })
            .unwrap();

        let mut buf = Vec::new();
        write_node_link(&g, &mut buf).unwrap();
        let back = parse_node_link(std::str::from_utf8(&buf).unwrap()).unwrap();

        assert_eq!(back.metadata(), g.metadata());
        assert_eq!(back.nodes().collect::<Vec<_>>(), g.nodes().collect::<Vec<_>>());
        assert_eq!(back.edges().collect::<Vec<_>>(), g.edges().collect::<Vec<_>>());
    }

    #[test]
    fn test_missing_label_falls_back_to_id() {
        let doc = r#"{"directed": true, "nodes": [{"id": "query_1", "node_type": "query"}], "links": []}"#;
        let g = parse_node_link(doc).unwrap();
        assert!(g.is_directed());
        assert_eq!(g.node("query_1").unwrap().label, "query_1");
    }

    #[test]
    fn test_unknown_endpoint_rejected() {
        let doc = r#"{"directed": false, "nodes": [{"id": "query_1", "node_type": "query"}],
                      "links": [{"source": "query_1", "target": "website_x", "weight": 1.0}]}"#;
        assert!(matches!(parse_node_link(doc), Err(NetworkError::UnknownNode(_))));
    }
}
