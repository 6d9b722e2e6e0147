//! GraphML writer

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

use super::values::{columns, to_text, AttrType};
use crate::errors::Result;
use crate::shared::models::{Attributes, Graph};

const GRAPHML_NS: &str = "http://graphml.graphdrawing.org/xmlns";

/// One `<key>` declaration
struct Key {
    id: String,
    name: String,
    ty: AttrType,
}

fn keys(prefix: &str, cols: Vec<(String, AttrType)>) -> Vec<Key> {
    cols.into_iter()
        .enumerate()
        .map(|(i, (name, ty))| Key {
            id: format!("{}{}", prefix, i),
            name,
            ty,
        })
        .collect()
}

pub fn write_graphml<W: Write>(graph: &Graph, out: W) -> Result<()> {
    let mut writer = Writer::new_with_indent(out, b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new("graphml");
    root.push_attribute(("xmlns", GRAPHML_NS));
    writer.write_event(Event::Start(root))?;

    let graph_keys = keys("g", columns(&[graph.metadata()]));

    let mut node_cols = vec![
        ("node_type".to_string(), AttrType::String),
        ("label".to_string(), AttrType::String),
    ];
    node_cols.extend(
        columns(&graph.nodes().map(|n| &n.attrs).collect::<Vec<_>>())
            .into_iter()
            .filter(|(k, _)| k != "node_type" && k != "label"),
    );
    let node_keys = keys("n", node_cols);

    let mut edge_cols = vec![("weight".to_string(), AttrType::Double)];
    edge_cols.extend(
        columns(&graph.edges().map(|e| &e.attrs).collect::<Vec<_>>())
            .into_iter()
            .filter(|(k, _)| k != "weight"),
    );
    let edge_keys = keys("e", edge_cols);

    for (domain, list) in [("graph", &graph_keys), ("node", &node_keys), ("edge", &edge_keys)] {
        for key in list {
            let mut el = BytesStart::new("key");
            el.push_attribute(("id", key.id.as_str()));
            el.push_attribute(("for", domain));
            el.push_attribute(("attr.name", key.name.as_str()));
            el.push_attribute(("attr.type", key.ty.as_str()));
            writer.write_event(Event::Empty(el))?;
        }
    }

    let mut g = BytesStart::new("graph");
    g.push_attribute(("id", "G"));
    g.push_attribute((
        "edgedefault",
        if graph.is_directed() { "directed" } else { "undirected" },
    ));
    writer.write_event(Event::Start(g))?;
    write_data(&mut writer, &graph_keys, graph.metadata())?;

    for node in graph.nodes() {
        let mut el = BytesStart::new("node");
        el.push_attribute(("id", node.id.as_str()));
        writer.write_event(Event::Start(el))?;

        let mut values = node.attrs.clone();
        values.insert("node_type".into(), node.node_type.as_str().into());
        values.insert("label".into(), node.label.clone().into());
        write_data(&mut writer, &node_keys, &values)?;
        writer.write_event(Event::End(BytesEnd::new("node")))?;
    }

    for edge in graph.edges() {
        let mut el = BytesStart::new("edge");
        el.push_attribute(("source", edge.source.as_str()));
        el.push_attribute(("target", edge.target.as_str()));
        writer.write_event(Event::Start(el))?;

        let mut values = edge.attrs.clone();
        values.insert("weight".into(), edge.weight.into());
        write_data(&mut writer, &edge_keys, &values)?;
        writer.write_event(Event::End(BytesEnd::new("edge")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("graph")))?;
    writer.write_event(Event::End(BytesEnd::new("graphml")))?;
    writer.into_inner().flush()?;
    Ok(())
}

fn write_data<W: Write>(writer: &mut Writer<W>, keys: &[Key], values: &Attributes) -> Result<()> {
    for key in keys {
        if let Some(value) = values.get(&key.name) {
            let text = to_text(value);
            let mut el = BytesStart::new("data");
            el.push_attribute(("key", key.id.as_str()));
            writer.write_event(Event::Start(el))?;
            writer.write_event(Event::Text(BytesText::new(&text)))?;
            writer.write_event(Event::End(BytesEnd::new("data")))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;
    use crate::shared::models::NodeType;

    #[test]
    fn test_graphml_keys_and_data() {
        let mut g = Graph::new(true);
        g.set_metadata("network_type", "search_website");
        g.add_node("query_1", NodeType::Query, "rust", attrs!()).unwrap();
        g.add_node("website_a.com", NodeType::Website, "a.com", attrs! { "domain" => "a.com" })
            .unwrap();
        g.add_edge("query_1", "website_a.com", 1.0, attrs! { "rank" => 1 })
            .unwrap();

        let mut buf = Vec::new();
        write_graphml(&g, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("edgedefault=\"directed\""));
        assert!(text.contains("attr.name=\"network_type\""));
        assert!(text.contains("attr.name=\"rank\" attr.type=\"long\""));
        assert!(text.contains("attr.name=\"weight\" attr.type=\"double\""));
        assert!(text.contains("<node id=\"website_a.com\">"));
        assert!(text.contains(">search_website<"));
    }
}
