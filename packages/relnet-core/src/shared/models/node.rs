//! Node model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Attributes;

/// Node type tag
///
/// A bipartite network uses exactly two of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Query,
    Website,
    Keyword,
    Entity,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Query => "query",
            NodeType::Website => "website",
            NodeType::Keyword => "keyword",
            NodeType::Entity => "entity",
        }
    }

    pub fn all() -> [NodeType; 4] {
        [
            NodeType::Query,
            NodeType::Website,
            NodeType::Keyword,
            NodeType::Entity,
        ]
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "query" => Ok(NodeType::Query),
            "website" => Ok(NodeType::Website),
            "keyword" => Ok(NodeType::Keyword),
            "entity" => Ok(NodeType::Entity),
            other => Err(format!("unknown node type '{}'", other)),
        }
    }
}

/// Graph node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Sanitized identifier (see `shared::utils::id_generator`)
    pub id: String,
    pub node_type: NodeType,
    pub label: String,
    /// Type-specific attributes (domain, url, title, language, ...)
    #[serde(default)]
    pub attrs: Attributes,
}
