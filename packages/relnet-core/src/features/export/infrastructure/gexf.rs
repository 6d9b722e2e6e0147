//! GEXF 1.2 writer and reader
//!
//! Node type is written as the `node_type` node attribute so a re-parsed
//! graph keeps its partition.

use ahash::AHashMap;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};
use std::io::Write;

use super::values::{columns, to_text, AttrType};
use crate::errors::{NetworkError, Result};
use crate::shared::models::{Attributes, Graph, NodeType};

const GEXF_NS: &str = "http://www.gexf.net/1.2draft";
const NODE_TYPE_ATTR: &str = "node_type";

pub fn write_gexf<W: Write>(graph: &Graph, out: W) -> Result<()> {
    let mut writer = Writer::new_with_indent(out, b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new("gexf");
    root.push_attribute(("xmlns", GEXF_NS));
    root.push_attribute(("version", "1.2"));
    writer.write_event(Event::Start(root))?;

    let mut meta = BytesStart::new("meta");
    let modified = chrono::Utc::now().format("%Y-%m-%d").to_string();
    meta.push_attribute(("lastmodifieddate", modified.as_str()));
    writer.write_event(Event::Start(meta))?;
    write_text_element(&mut writer, "creator", "relnet")?;
    writer.write_event(Event::End(BytesEnd::new("meta")))?;

    let mut g = BytesStart::new("graph");
    g.push_attribute((
        "defaultedgetype",
        if graph.is_directed() { "directed" } else { "undirected" },
    ));
    g.push_attribute(("mode", "static"));
    writer.write_event(Event::Start(g))?;

    let mut node_columns = vec![(NODE_TYPE_ATTR.to_string(), AttrType::String)];
    node_columns.extend(
        columns(&graph.nodes().map(|n| &n.attrs).collect::<Vec<_>>())
            .into_iter()
            .filter(|(k, _)| k != NODE_TYPE_ATTR),
    );
    let edge_columns = columns(&graph.edges().map(|e| &e.attrs).collect::<Vec<_>>());

    write_declarations(&mut writer, "node", &node_columns)?;
    write_declarations(&mut writer, "edge", &edge_columns)?;

    writer.write_event(Event::Start(BytesStart::new("nodes")))?;
    for node in graph.nodes() {
        let mut el = BytesStart::new("node");
        el.push_attribute(("id", node.id.as_str()));
        el.push_attribute(("label", node.label.as_str()));
        writer.write_event(Event::Start(el))?;

        let mut values = node.attrs.clone();
        values.insert(NODE_TYPE_ATTR.to_string(), node.node_type.as_str().into());
        write_attvalues(&mut writer, &node_columns, &values)?;
        writer.write_event(Event::End(BytesEnd::new("node")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("nodes")))?;

    writer.write_event(Event::Start(BytesStart::new("edges")))?;
    for (pos, edge) in graph.edges().enumerate() {
        let id = pos.to_string();
        let weight = edge.weight.to_string();
        let mut el = BytesStart::new("edge");
        el.push_attribute(("id", id.as_str()));
        el.push_attribute(("source", edge.source.as_str()));
        el.push_attribute(("target", edge.target.as_str()));
        el.push_attribute(("weight", weight.as_str()));

        if edge.attrs.is_empty() {
            writer.write_event(Event::Empty(el))?;
        } else {
            writer.write_event(Event::Start(el))?;
            write_attvalues(&mut writer, &edge_columns, &edge.attrs)?;
            writer.write_event(Event::End(BytesEnd::new("edge")))?;
        }
    }
    writer.write_event(Event::End(BytesEnd::new("edges")))?;

    writer.write_event(Event::End(BytesEnd::new("graph")))?;
    writer.write_event(Event::End(BytesEnd::new("gexf")))?;
    writer.into_inner().flush()?;
    Ok(())
}

fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(quick_xml::events::BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn write_declarations<W: Write>(
    writer: &mut Writer<W>,
    class: &str,
    cols: &[(String, AttrType)],
) -> Result<()> {
    if cols.is_empty() {
        return Ok(());
    }
    let mut el = BytesStart::new("attributes");
    el.push_attribute(("class", class));
    writer.write_event(Event::Start(el))?;
    for (i, (title, ty)) in cols.iter().enumerate() {
        let id = i.to_string();
        let mut attr = BytesStart::new("attribute");
        attr.push_attribute(("id", id.as_str()));
        attr.push_attribute(("title", title.as_str()));
        attr.push_attribute(("type", ty.as_str()));
        writer.write_event(Event::Empty(attr))?;
    }
    writer.write_event(Event::End(BytesEnd::new("attributes")))?;
    Ok(())
}

fn write_attvalues<W: Write>(
    writer: &mut Writer<W>,
    cols: &[(String, AttrType)],
    values: &Attributes,
) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("attvalues")))?;
    for (i, (key, _)) in cols.iter().enumerate() {
        if let Some(value) = values.get(key) {
            let id = i.to_string();
            let text = to_text(value);
            let mut el = BytesStart::new("attvalue");
            el.push_attribute(("for", id.as_str()));
            el.push_attribute(("value", text.as_str()));
            writer.write_event(Event::Empty(el))?;
        }
    }
    writer.write_event(Event::End(BytesEnd::new("attvalues")))?;
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// Reader
// ═══════════════════════════════════════════════════════════════════════════

fn attributes_of(el: &BytesStart<'_>) -> Result<AHashMap<String, String>> {
    let mut out = AHashMap::new();
    for attr in el.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        out.insert(key, attr.unescape_value()?.into_owned());
    }
    Ok(out)
}

#[derive(Debug)]
enum Pending {
    Node {
        id: String,
        label: String,
        attrs: Attributes,
    },
    Edge {
        source: String,
        target: String,
        weight: f64,
        attrs: Attributes,
    },
}

struct GexfParser {
    graph: Graph,
    class: Option<String>,
    node_columns: AHashMap<String, (String, AttrType)>,
    edge_columns: AHashMap<String, (String, AttrType)>,
    pending: Option<Pending>,
}

impl GexfParser {
    fn new() -> Self {
        Self {
            graph: Graph::new(false),
            class: None,
            node_columns: AHashMap::new(),
            edge_columns: AHashMap::new(),
            pending: None,
        }
    }

    fn open(&mut self, el: &BytesStart<'_>) -> Result<()> {
        let attrs = attributes_of(el)?;
        let get = |key: &str| attrs.get(key).cloned().unwrap_or_default();

        match el.name().as_ref() {
            b"graph" => {
                let directed = attrs.get("defaultedgetype").map(String::as_str) == Some("directed");
                self.graph = Graph::new(directed);
            }
            b"attributes" => self.class = attrs.get("class").cloned(),
            b"attribute" => {
                let column = (get("title"), AttrType::parse(&get("type")));
                match self.class.as_deref() {
                    Some("edge") => self.edge_columns.insert(get("id"), column),
                    _ => self.node_columns.insert(get("id"), column),
                };
            }
            b"node" => {
                let id = get("id");
                let label = attrs.get("label").cloned().unwrap_or_else(|| id.clone());
                self.pending = Some(Pending::Node {
                    id,
                    label,
                    attrs: Attributes::new(),
                });
            }
            b"edge" => {
                let weight = match attrs.get("weight") {
                    Some(w) => w.parse::<f64>().map_err(|_| {
                        NetworkError::xml(format!("edge weight '{}' is not a number", w))
                    })?,
                    None => 1.0,
                };
                self.pending = Some(Pending::Edge {
                    source: get("source"),
                    target: get("target"),
                    weight,
                    attrs: Attributes::new(),
                });
            }
            b"attvalue" => {
                let column_id = get("for");
                match self.pending.as_mut() {
                    Some(Pending::Node { attrs: values, .. }) => {
                        if let Some((title, ty)) = self.node_columns.get(&column_id) {
                            values.insert(title.clone(), ty.decode(&get("value")));
                        }
                    }
                    Some(Pending::Edge { attrs: values, .. }) => {
                        if let Some((title, ty)) = self.edge_columns.get(&column_id) {
                            values.insert(title.clone(), ty.decode(&get("value")));
                        }
                    }
                    None => {}
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn close(&mut self, name: &[u8]) -> Result<()> {
        match name {
            b"attributes" => self.class = None,
            b"node" | b"edge" => self.flush()?,
            _ => {}
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match self.pending.take() {
            Some(Pending::Node { id, label, mut attrs }) => {
                let node_type = attrs
                    .remove(NODE_TYPE_ATTR)
                    .and_then(|v| v.as_str().and_then(|s| s.parse::<NodeType>().ok()))
                    .ok_or_else(|| {
                        NetworkError::xml(format!("node '{}' has no valid node_type", id))
                    })?;
                self.graph.add_node(&id, node_type, label, attrs)?;
            }
            Some(Pending::Edge {
                source,
                target,
                weight,
                attrs,
            }) => self.graph.add_edge(&source, &target, weight, attrs)?,
            None => {}
        }
        Ok(())
    }
}

/// Parse a GEXF document written by [`write_gexf`]
pub fn parse_gexf(content: &str) -> Result<Graph> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);
    let mut parser = GexfParser::new();

    loop {
        match reader.read_event()? {
            Event::Start(el) => parser.open(&el)?,
            Event::Empty(el) => {
                parser.open(&el)?;
                parser.close(el.name().as_ref())?;
            }
            Event::End(el) => parser.close(el.name().as_ref())?,
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(parser.graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;

    fn sample() -> Graph {
        let mut g = Graph::new(false);
        g.add_node(
            "website_a.com",
            NodeType::Website,
            "a.com",
            attrs! { "domain" => "a.com", "pages" => 3 },
        )
        .unwrap();
        g.add_node("keyword_rust", NodeType::Keyword, "rust & co", attrs!())
            .unwrap();
        g.add_edge(
            "website_a.com",
            "keyword_rust",
            0.75,
            attrs! { "frequency" => 4, "langs" => vec!["en", "de"] },
        )
        .unwrap();
        g
    }

    #[test]
    fn test_write_then_parse() {
        let mut buf = Vec::new();
        write_gexf(&sample(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("defaultedgetype=\"undirected\""));
        assert!(text.contains("rust &amp; co"));

        let g = parse_gexf(&text).unwrap();
        assert_eq!(g.node_count(), 2);
        let site = g.node("website_a.com").unwrap();
        assert_eq!(site.node_type, NodeType::Website);
        assert_eq!(site.attrs["pages"], 3);
        assert_eq!(g.node("keyword_rust").unwrap().label, "rust & co");

        let edge = g.edge("website_a.com", "keyword_rust").unwrap();
        assert_eq!(edge.weight, 0.75);
        assert_eq!(edge.attrs["frequency"], 4);
        assert_eq!(edge.attrs["langs"], r#"["en","de"]"#);
    }

    #[test]
    fn test_missing_node_type_rejected() {
        let doc = r#"<?xml version="1.0" encoding="UTF-8"?>
<gexf xmlns="http://www.gexf.net/1.2draft" version="1.2">
  <graph defaultedgetype="undirected">
    <nodes><node id="a" label="a"/></nodes>
  </graph>
</gexf>"#;
        assert!(matches!(parse_gexf(doc), Err(NetworkError::Xml(_))));
    }
}
