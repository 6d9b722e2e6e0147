//! Relevance graph container
//!
//! Nodes are keyed by sanitized id, edges by endpoint pair. Storage is a
//! petgraph `DiGraph`; for undirected graphs `(a, b)` and `(b, a)` resolve to
//! the same edge. Nodes and edges are never removed in place: pruning builds a
//! new graph through [`Graph::filtered`], so node and edge positions always
//! equal insertion order. Every documented tie-break relies on that.

use ahash::AHashMap;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde_json::Value;

use super::{Attributes, Edge, Node, NodeType};
use crate::errors::{NetworkError, Result};
use crate::shared::utils::id_generator::sanitize_node_id;

#[derive(Debug, Clone)]
pub struct Graph {
    inner: DiGraph<Node, Edge>,
    index: AHashMap<String, NodeIndex>,
    directed: bool,
    metadata: Attributes,
}

impl Graph {
    /// Create an empty graph
    pub fn new(directed: bool) -> Self {
        Self {
            inner: DiGraph::new(),
            index: AHashMap::new(),
            directed,
            metadata: Attributes::new(),
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.node_count() == 0
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Mutation
    // ═══════════════════════════════════════════════════════════════════════

    /// Add a node, or refresh an existing node of the same type
    ///
    /// The id is sanitized first. Re-adding an id with the same type updates
    /// the label and merges attributes; a different type fails with
    /// `DuplicateNode`.
    pub fn add_node(
        &mut self,
        id: &str,
        node_type: NodeType,
        label: impl Into<String>,
        attrs: Attributes,
    ) -> Result<()> {
        let id = sanitize_node_id(id);

        if let Some(&idx) = self.index.get(&id) {
            let node = &mut self.inner[idx];
            if node.node_type != node_type {
                return Err(NetworkError::DuplicateNode {
                    id,
                    existing: node.node_type,
                    requested: node_type,
                });
            }
            node.label = label.into();
            node.attrs.extend(attrs);
            return Ok(());
        }

        let idx = self.inner.add_node(Node {
            id: id.clone(),
            node_type,
            label: label.into(),
            attrs,
        });
        self.index.insert(id, idx);
        Ok(())
    }

    /// Add an edge between two existing nodes
    ///
    /// A repeated call for the same pair overwrites the weight and merges the
    /// attributes; the edge keeps its original position. Weights are never
    /// summed.
    pub fn add_edge(&mut self, src: &str, dst: &str, weight: f64, attrs: Attributes) -> Result<()> {
        let src = sanitize_node_id(src);
        let dst = sanitize_node_id(dst);

        let a = *self
            .index
            .get(&src)
            .ok_or_else(|| NetworkError::UnknownNode(src.clone()))?;
        let b = *self
            .index
            .get(&dst)
            .ok_or_else(|| NetworkError::UnknownNode(dst.clone()))?;

        if !weight.is_finite() || weight < 0.0 {
            return Err(NetworkError::InvalidWeight { src, dst, weight });
        }

        if let Some(existing) = self.find_edge(a, b) {
            let edge = &mut self.inner[existing];
            edge.weight = weight;
            edge.attrs.extend(attrs);
            return Ok(());
        }

        self.inner.add_edge(
            a,
            b,
            Edge {
                source: src,
                target: dst,
                weight,
                attrs,
            },
        );
        Ok(())
    }

    pub fn set_metadata(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.metadata.insert(key.into(), value.into());
    }

    pub fn metadata(&self) -> &Attributes {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut Attributes {
        &mut self.metadata
    }

    /// Linearly rescale all edge weights into `[min, max]`
    ///
    /// No-op on an edgeless graph. If every weight is equal they all become
    /// `max`.
    pub fn normalize_weights(&mut self, min: f64, max: f64) -> Result<()> {
        if !min.is_finite() || !max.is_finite() || min < 0.0 || min > max {
            return Err(NetworkError::invalid_parameter(format!(
                "normalize range [{}, {}] must satisfy 0 <= min <= max",
                min, max
            )));
        }
        if self.inner.edge_count() == 0 {
            return Ok(());
        }

        let (lo, hi) = self
            .inner
            .edge_weights()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), e| {
                (lo.min(e.weight), hi.max(e.weight))
            });
        let span = hi - lo;

        for edge in self.inner.edge_weights_mut() {
            edge.weight = if span == 0.0 {
                max
            } else {
                min + (edge.weight - lo) / span * (max - min)
            };
        }
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Validation
    // ═══════════════════════════════════════════════════════════════════════

    /// Check the bipartite invariant
    ///
    /// An empty graph passes. Otherwise the graph must hold exactly two node
    /// types (and, when `expected` is given, only those two), and no edge may
    /// join two nodes of the same type.
    pub fn validate_bipartite(&self, expected: Option<[NodeType; 2]>) -> Result<()> {
        if self.inner.node_count() == 0 {
            return Ok(());
        }

        if let Some([a, b]) = expected {
            if a == b {
                return Err(NetworkError::invariant(format!(
                    "expected two distinct node types, got '{}' twice",
                    a
                )));
            }
            if let Some(node) = self
                .inner
                .node_weights()
                .find(|n| n.node_type != a && n.node_type != b)
            {
                return Err(NetworkError::invariant(format!(
                    "node '{}' has type '{}', expected '{}' or '{}'",
                    node.id, node.node_type, a, b
                )));
            }
        }

        let types = self.node_types();
        if types.len() != 2 {
            let names: Vec<&str> = types.iter().map(|t| t.as_str()).collect();
            return Err(NetworkError::invariant(format!(
                "expected exactly 2 node types, found {} [{}]",
                types.len(),
                names.join(", ")
            )));
        }

        for raw in self.inner.raw_edges() {
            let s = &self.inner[raw.source()];
            let t = &self.inner[raw.target()];
            if s.node_type == t.node_type {
                return Err(NetworkError::invariant(format!(
                    "edge '{}' -> '{}' joins two '{}' nodes",
                    s.id, t.id, s.node_type
                )));
            }
        }
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Lookup
    // ═══════════════════════════════════════════════════════════════════════

    pub fn contains_node(&self, id: &str) -> bool {
        self.index.contains_key(&sanitize_node_id(id))
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index
            .get(&sanitize_node_id(id))
            .map(|&idx| &self.inner[idx])
    }

    /// Edge between `a` and `b` (either orientation when undirected)
    pub fn edge(&self, a: &str, b: &str) -> Option<&Edge> {
        let a = *self.index.get(&sanitize_node_id(a))?;
        let b = *self.index.get(&sanitize_node_id(b))?;
        self.find_edge(a, b).map(|e| &self.inner[e])
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.inner.node_weights()
    }

    /// Edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.inner.edge_weights()
    }

    /// Distinct node types in order of first appearance
    pub fn node_types(&self) -> Vec<NodeType> {
        let mut types = Vec::new();
        for node in self.inner.node_weights() {
            if !types.contains(&node.node_type) {
                types.push(node.node_type);
            }
        }
        types
    }

    /// Number of incident edges (in + out for directed graphs)
    pub fn degree(&self, id: &str) -> usize {
        self.node_position(id)
            .map(|pos| self.incident_edge_positions(pos, false).len())
            .unwrap_or(0)
    }

    pub fn out_degree(&self, id: &str) -> usize {
        self.node_position(id)
            .map(|pos| self.incident_edge_positions(pos, true).len())
            .unwrap_or(0)
    }

    pub fn incident_edges(&self, id: &str) -> Vec<&Edge> {
        match self.node_position(id) {
            Some(pos) => self
                .incident_edge_positions(pos, false)
                .into_iter()
                .map(|e| self.edge_at(e))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn neighbors(&self, id: &str) -> Vec<&str> {
        match self.node_position(id) {
            Some(pos) => self
                .neighbor_positions(pos, false)
                .into_iter()
                .map(|n| self.node_at(n).id.as_str())
                .collect(),
            None => Vec::new(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Positional access (insertion order)
    // ═══════════════════════════════════════════════════════════════════════

    pub fn node_position(&self, id: &str) -> Option<usize> {
        self.index.get(&sanitize_node_id(id)).map(|idx| idx.index())
    }

    /// Node at an insertion position; panics when out of range
    pub fn node_at(&self, pos: usize) -> &Node {
        &self.inner[NodeIndex::new(pos)]
    }

    /// Edge at an insertion position; panics when out of range
    pub fn edge_at(&self, pos: usize) -> &Edge {
        &self.inner[EdgeIndex::new(pos)]
    }

    /// Endpoint positions `(source, target)` of the edge at `pos`
    pub fn edge_endpoints_at(&self, pos: usize) -> (usize, usize) {
        let raw = &self.inner.raw_edges()[pos];
        (raw.source().index(), raw.target().index())
    }

    /// Positions of edges touching the node, sorted
    ///
    /// With `outgoing_only` only edges leaving the node are returned; this
    /// is only meaningful for directed graphs.
    pub fn incident_edge_positions(&self, node_pos: usize, outgoing_only: bool) -> Vec<usize> {
        let n = NodeIndex::new(node_pos);
        let mut positions: Vec<usize> = self
            .inner
            .edges_directed(n, Direction::Outgoing)
            .map(|e| e.id().index())
            .collect();
        if !outgoing_only {
            positions.extend(
                self.inner
                    .edges_directed(n, Direction::Incoming)
                    .map(|e| e.id().index()),
            );
        }
        positions.sort_unstable();
        positions.dedup();
        positions
    }

    /// Positions of adjacent nodes, sorted
    pub fn neighbor_positions(&self, node_pos: usize, outgoing_only: bool) -> Vec<usize> {
        let mut out: Vec<usize> = self
            .incident_edge_positions(node_pos, outgoing_only)
            .into_iter()
            .map(|e| {
                let (s, t) = self.edge_endpoints_at(e);
                if s == node_pos {
                    t
                } else {
                    s
                }
            })
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Derived graphs
    // ═══════════════════════════════════════════════════════════════════════

    /// New graph keeping selected nodes and edges
    ///
    /// An edge survives only if `keep_edge` accepts it and both endpoints
    /// survive. Relative order of nodes and edges is preserved; graph
    /// metadata is copied.
    pub fn filtered(
        &self,
        keep_node: impl Fn(usize, &Node) -> bool,
        keep_edge: impl Fn(usize, &Edge) -> bool,
    ) -> Graph {
        let mut out = Graph::new(self.directed);
        out.metadata = self.metadata.clone();

        let mut remap: Vec<Option<NodeIndex>> = vec![None; self.inner.node_count()];
        for (pos, node) in self.inner.node_weights().enumerate() {
            if keep_node(pos, node) {
                let idx = out.inner.add_node(node.clone());
                out.index.insert(node.id.clone(), idx);
                remap[pos] = Some(idx);
            }
        }

        for (pos, raw) in self.inner.raw_edges().iter().enumerate() {
            let endpoints = (remap[raw.source().index()], remap[raw.target().index()]);
            if let (Some(a), Some(b)) = endpoints {
                if keep_edge(pos, &raw.weight) {
                    out.inner.add_edge(a, b, raw.weight.clone());
                }
            }
        }
        out
    }

    /// Copy without nodes of degree zero
    pub fn without_isolated_nodes(&self) -> Graph {
        let mut touched = vec![false; self.inner.node_count()];
        for raw in self.inner.raw_edges() {
            touched[raw.source().index()] = true;
            touched[raw.target().index()] = true;
        }
        self.filtered(|pos, _| touched[pos], |_, _| true)
    }

    /// Copy with every `null` attribute removed (nodes, edges, metadata)
    pub fn without_null_attrs(&self) -> Graph {
        let mut out = self.clone();
        for node in out.inner.node_weights_mut() {
            node.attrs.retain(|_, v| !v.is_null());
        }
        for edge in out.inner.edge_weights_mut() {
            edge.attrs.retain(|_, v| !v.is_null());
        }
        out.metadata.retain(|_, v| !v.is_null());
        out
    }

    fn find_edge(&self, a: NodeIndex, b: NodeIndex) -> Option<EdgeIndex> {
        if self.directed {
            self.inner.find_edge(a, b)
        } else {
            self.inner.find_edge_undirected(a, b).map(|(e, _)| e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;

    fn website_keyword_graph() -> Graph {
        let mut g = Graph::new(false);
        g.add_node("website_a.com", NodeType::Website, "a.com", attrs! {})
            .unwrap();
        g.add_node("keyword_climate", NodeType::Keyword, "climate", attrs! {})
            .unwrap();
        g.add_edge("website_a.com", "keyword_climate", 0.5, attrs! { "frequency" => 2 })
            .unwrap();
        g
    }

    #[test]
    fn test_add_node_same_type_merges() {
        let mut g = Graph::new(false);
        g.add_node("n", NodeType::Website, "old", attrs! { "domain" => "a.com" })
            .unwrap();
        g.add_node("n", NodeType::Website, "new", attrs! { "url" => "https://a.com" })
            .unwrap();

        assert_eq!(g.node_count(), 1);
        let node = g.node("n").unwrap();
        assert_eq!(node.label, "new");
        assert_eq!(node.attrs["domain"], "a.com");
        assert_eq!(node.attrs["url"], "https://a.com");
    }

    #[test]
    fn test_add_node_different_type_fails() {
        let mut g = Graph::new(false);
        g.add_node("n", NodeType::Website, "n", attrs! {}).unwrap();
        let err = g.add_node("n", NodeType::Keyword, "n", attrs! {}).unwrap_err();
        assert!(matches!(err, NetworkError::DuplicateNode { .. }));
    }

    #[test]
    fn test_add_edge_unknown_node() {
        let mut g = Graph::new(false);
        g.add_node("a", NodeType::Website, "a", attrs! {}).unwrap();
        let err = g.add_edge("a", "ghost", 1.0, attrs! {}).unwrap_err();
        match err {
            NetworkError::UnknownNode(id) => assert_eq!(id, "ghost"),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_add_edge_rejects_negative_and_nan() {
        let mut g = website_keyword_graph();
        assert!(g
            .add_edge("website_a.com", "keyword_climate", -1.0, attrs! {})
            .is_err());
        assert!(g
            .add_edge("website_a.com", "keyword_climate", f64::NAN, attrs! {})
            .is_err());
        assert_eq!(g.edge("website_a.com", "keyword_climate").unwrap().weight, 0.5);
    }

    #[test]
    fn test_duplicate_edge_last_write_wins() {
        let mut g = website_keyword_graph();
        g.add_edge("keyword_climate", "website_a.com", 3.0, attrs! { "rank" => 1 })
            .unwrap();

        assert_eq!(g.edge_count(), 1);
        let edge = g.edge("website_a.com", "keyword_climate").unwrap();
        assert_eq!(edge.weight, 3.0);
        assert_eq!(edge.attrs["frequency"], 2);
        assert_eq!(edge.attrs["rank"], 1);
        assert_eq!(edge.source, "website_a.com");
    }

    #[test]
    fn test_directed_pairs_are_distinct() {
        let mut g = Graph::new(true);
        g.add_node("q", NodeType::Query, "q", attrs! {}).unwrap();
        g.add_node("w", NodeType::Website, "w", attrs! {}).unwrap();
        g.add_edge("q", "w", 1.0, attrs! {}).unwrap();
        g.add_edge("w", "q", 2.0, attrs! {}).unwrap();

        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.out_degree("q"), 1);
        assert_eq!(g.degree("q"), 2);
    }

    #[test]
    fn test_ids_are_sanitized_on_insert_and_lookup() {
        let mut g = Graph::new(false);
        g.add_node("website_http://a.com/a b", NodeType::Website, "a", attrs! {})
            .unwrap();
        assert!(g.contains_node("website_http___a.com_a_b"));
        assert!(g.contains_node("website_http://a.com/a b"));
        assert_eq!(g.nodes().next().unwrap().id, "website_http___a.com_a_b");
    }

    #[test]
    fn test_validate_bipartite_ok_and_empty() {
        assert!(Graph::new(false).validate_bipartite(None).is_ok());
        let g = website_keyword_graph();
        assert!(g.validate_bipartite(None).is_ok());
        assert!(g
            .validate_bipartite(Some([NodeType::Website, NodeType::Keyword]))
            .is_ok());
    }

    #[test]
    fn test_validate_bipartite_names_offending_edge() {
        let mut g = website_keyword_graph();
        g.add_node("website_b.com", NodeType::Website, "b.com", attrs! {})
            .unwrap();
        g.add_edge("website_a.com", "website_b.com", 1.0, attrs! {})
            .unwrap();

        let err = g.validate_bipartite(None).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("website_a.com"));
        assert!(msg.contains("website_b.com"));
    }

    #[test]
    fn test_validate_bipartite_names_offending_node() {
        let mut g = website_keyword_graph();
        g.add_node("entity_LOC_Paris", NodeType::Entity, "Paris", attrs! {})
            .unwrap();

        let err = g
            .validate_bipartite(Some([NodeType::Website, NodeType::Keyword]))
            .unwrap_err();
        assert!(err.to_string().contains("entity_LOC_Paris"));

        let err = g.validate_bipartite(None).unwrap_err();
        assert!(err.to_string().contains("found 3"));
    }

    #[test]
    fn test_normalize_weights() {
        let mut g = Graph::new(false);
        for id in ["w", "k1", "k2", "k3"] {
            let t = if id == "w" {
                NodeType::Website
            } else {
                NodeType::Keyword
            };
            g.add_node(id, t, id, attrs! {}).unwrap();
        }
        g.add_edge("w", "k1", 2.0, attrs! {}).unwrap();
        g.add_edge("w", "k2", 4.0, attrs! {}).unwrap();
        g.add_edge("w", "k3", 6.0, attrs! {}).unwrap();

        g.normalize_weights(0.0, 1.0).unwrap();
        let weights: Vec<f64> = g.edges().map(|e| e.weight).collect();
        assert_eq!(weights, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_normalize_equal_weights_collapse_to_max() {
        let mut g = website_keyword_graph();
        g.normalize_weights(1.0, 5.0).unwrap();
        assert_eq!(g.edges().next().unwrap().weight, 5.0);

        let mut empty = Graph::new(false);
        assert!(empty.normalize_weights(0.0, 1.0).is_ok());
        assert!(empty.normalize_weights(2.0, 1.0).is_err());
    }

    #[test]
    fn test_filtered_and_isolates() {
        let mut g = website_keyword_graph();
        g.add_node("keyword_lonely", NodeType::Keyword, "lonely", attrs! {})
            .unwrap();
        g.set_metadata("network_type", "website_keyword");

        let pruned = g.without_isolated_nodes();
        assert_eq!(pruned.node_count(), 2);
        assert_eq!(pruned.edge_count(), 1);
        assert_eq!(pruned.metadata()["network_type"], "website_keyword");

        let no_edges = g.filtered(|_, _| true, |_, _| false);
        assert_eq!(no_edges.node_count(), 3);
        assert_eq!(no_edges.edge_count(), 0);
        // original untouched
        assert_eq!(g.node_count(), 3);
    }

    #[test]
    fn test_without_null_attrs() {
        let mut g = Graph::new(false);
        g.add_node(
            "w",
            NodeType::Website,
            "w",
            attrs! { "title" => Option::<String>::None, "domain" => "a.com" },
        )
        .unwrap();
        g.set_metadata("note", Value::Null);

        let clean = g.without_null_attrs();
        let node = clean.node("w").unwrap();
        assert!(!node.attrs.contains_key("title"));
        assert!(node.attrs.contains_key("domain"));
        assert!(clean.metadata().get("note").is_none());
        assert!(g.node("w").unwrap().attrs.contains_key("title"));
    }

    #[test]
    fn test_neighbors_and_incident_edges() {
        let g = website_keyword_graph();
        assert_eq!(g.neighbors("keyword_climate"), vec!["website_a.com"]);
        assert_eq!(g.incident_edges("website_a.com").len(), 1);
        assert!(g.neighbors("missing").is_empty());
    }
}
