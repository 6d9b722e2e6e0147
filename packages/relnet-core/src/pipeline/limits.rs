//! Node and edge caps

use crate::config::LimitsConfig;
use crate::errors::{NetworkError, Result};
use crate::shared::models::Graph;

/// Fail with `ResourceLimitExceeded` when either cap is breached
///
/// Nodes are checked first.
pub fn check_limits(graph: &Graph, limits: &LimitsConfig) -> Result<()> {
    if graph.node_count() > limits.max_nodes {
        return Err(NetworkError::ResourceLimitExceeded {
            resource: "node",
            actual: graph.node_count(),
            limit: limits.max_nodes,
        });
    }
    if graph.edge_count() > limits.max_edges {
        return Err(NetworkError::ResourceLimitExceeded {
            resource: "edge",
            actual: graph.edge_count(),
            limit: limits.max_edges,
        });
    }
    Ok(())
}
