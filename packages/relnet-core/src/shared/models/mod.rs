//! Shared models

mod edge;
mod graph;
mod node;

pub use edge::Edge;
pub use graph::Graph;
pub use node::{Node, NodeType};

// Re-export serde_json::Value for convenience (attribute values)
pub use serde_json::Value;

/// Attribute map carried by nodes, edges and graphs
///
/// Ordered so exports are deterministic. `Value::Null` entries are allowed in
/// memory and dropped on export.
pub type Attributes = std::collections::BTreeMap<String, Value>;
