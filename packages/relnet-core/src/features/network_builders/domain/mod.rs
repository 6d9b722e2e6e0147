//! Builder domain: network kinds, build output and the builder contract

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

use crate::errors::{NetworkError, Result};
use crate::shared::models::{Attributes, Graph, NodeType};
use relnet_source::SessionId;

/// Closed set of network kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuilderKind {
    SearchWebsite,
    WebsiteKeyword,
    #[serde(rename = "website_ner")]
    WebsiteNer,
    /// LLM concept networks; never implemented
    WebsiteConcept,
}

impl BuilderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SearchWebsite => "search_website",
            Self::WebsiteKeyword => "website_keyword",
            Self::WebsiteNer => "website_ner",
            Self::WebsiteConcept => "website_concept",
        }
    }

    pub fn is_implemented(&self) -> bool {
        !matches!(self, Self::WebsiteConcept)
    }

    /// The two node types a finished network of this kind holds
    pub fn node_types(&self) -> Option<[NodeType; 2]> {
        match self {
            Self::SearchWebsite => Some([NodeType::Query, NodeType::Website]),
            Self::WebsiteKeyword => Some([NodeType::Website, NodeType::Keyword]),
            Self::WebsiteNer => Some([NodeType::Website, NodeType::Entity]),
            Self::WebsiteConcept => None,
        }
    }

    /// Fail fast for kinds that cannot be built
    pub fn ensure_implemented(&self) -> Result<()> {
        if self.is_implemented() {
            Ok(())
        } else {
            Err(NetworkError::NotImplementedFeature(format!(
                "{} networks are not implemented",
                self.as_str()
            )))
        }
    }
}

impl fmt::Display for BuilderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuilderKind {
    type Err = NetworkError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "search_website" => Ok(Self::SearchWebsite),
            // "website_noun" is the historical name of keyword networks
            "website_keyword" | "website_noun" => Ok(Self::WebsiteKeyword),
            "website_ner" => Ok(Self::WebsiteNer),
            "website_concept" => Ok(Self::WebsiteConcept),
            other => Err(NetworkError::invalid_parameter(format!(
                "unknown network type '{}'",
                other
            ))),
        }
    }
}

/// Graph plus the metadata echoed onto it
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub graph: Graph,
    pub metadata: Attributes,
}

/// Common builder contract
///
/// Builders never fetch: the caller hands over the rows of one batch fetch.
pub trait NetworkBuilder {
    type Row;

    fn kind(&self) -> BuilderKind;

    /// Config echo stored in the metadata
    fn config_echo(&self) -> Value;

    fn build(&self, session_ids: &[SessionId], rows: &[Self::Row]) -> Result<BuildOutput>;
}

/// Per-build counters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildCounters {
    pub rows: usize,
    pub skipped: usize,
    /// Why rows were skipped, in first-seen order
    pub skip_reasons: Vec<(String, usize)>,
}

impl BuildCounters {
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn skip(&mut self, reason: &str) {
        self.skipped += 1;
        match self.skip_reasons.iter_mut().find(|(r, _)| r == reason) {
            Some((_, n)) => *n += 1,
            None => self.skip_reasons.push((reason.to_string(), 1)),
        }
    }

    /// Stamp the metadata onto the graph, check bipartiteness and wrap up
    ///
    /// A bipartite violation is logged, not returned.
    pub fn finish<B: NetworkBuilder + ?Sized>(
        self,
        builder: &B,
        session_ids: &[SessionId],
        mut graph: Graph,
    ) -> BuildOutput {
        let kind = builder.kind();

        let mut node_counts: AHashMap<&'static str, usize> = AHashMap::new();
        for node in graph.nodes() {
            *node_counts.entry(node.node_type.as_str()).or_default() += 1;
        }
        let node_counts: serde_json::Map<String, Value> = NodeType::all()
            .iter()
            .filter_map(|t| {
                node_counts
                    .get(t.as_str())
                    .map(|n| (t.as_str().to_string(), json!(n)))
            })
            .collect();
        let skip_reasons: serde_json::Map<String, Value> = self
            .skip_reasons
            .iter()
            .map(|(r, n)| (r.clone(), json!(n)))
            .collect();

        let node_count = graph.node_count();
        let edge_count = graph.edge_count();
        graph.set_metadata("network_type", kind.as_str());
        graph.set_metadata("session_ids", json!(session_ids));
        graph.set_metadata("node_count", node_count);
        graph.set_metadata("edge_count", edge_count);
        graph.set_metadata("node_counts", Value::Object(node_counts));
        graph.set_metadata("rows_processed", self.rows);
        graph.set_metadata("rows_skipped", self.skipped);
        graph.set_metadata("skip_reasons", Value::Object(skip_reasons));
        graph.set_metadata("config", builder.config_echo());
        graph.set_metadata("created_at", chrono::Utc::now().to_rfc3339());

        if let Err(err) = graph.validate_bipartite(kind.node_types()) {
            tracing::warn!(network_type = %kind, error = %err, "built network is not bipartite");
            graph.set_metadata("bipartite_warning", err.to_string());
        }

        tracing::info!(
            network_type = %kind,
            nodes = node_count,
            edges = edge_count,
            rows = self.rows,
            skipped = self.skipped,
            "network built"
        );

        BuildOutput {
            metadata: graph.metadata().clone(),
            graph,
        }
    }
}
