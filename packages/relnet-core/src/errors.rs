//! Error types for relnet-core
//!
//! Provides unified error handling across the crate.

use relnet_source::SourceError;
use thiserror::Error;

use crate::config::ConfigError;
use crate::shared::models::NodeType;

/// Main error type for network construction, pruning and export
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Bipartite constraint broken (logged by builders, never fatal there)
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// Node id reused with a different node type
    #[error("Duplicate node '{id}': exists as '{existing}', cannot re-add as '{requested}'")]
    DuplicateNode {
        id: String,
        existing: NodeType,
        requested: NodeType,
    },

    /// Edge endpoint missing from the graph
    #[error("Unknown node '{0}' referenced by edge")]
    UnknownNode(String),

    /// Negative, NaN or infinite edge weight
    #[error("Invalid weight {weight} on edge '{src}' -> '{dst}'")]
    InvalidWeight { src: String, dst: String, weight: f64 },

    /// Backboning algorithm name not recognised
    #[error("Unsupported backboning algorithm '{0}'. Valid: disparity_filter, threshold, top_k")]
    UnsupportedAlgorithm(String),

    /// Export format name not recognised
    #[error("Unsupported export format '{0}'. Valid: gexf, graphml, edgelist, csv, json")]
    UnsupportedFormat(String),

    /// Required algorithm argument not supplied
    #[error("Algorithm '{algorithm}' requires parameter '{parameter}'")]
    MissingParameter {
        algorithm: &'static str,
        parameter: &'static str,
    },

    /// Parameter present but out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Feature declared but not implemented
    #[error("Not implemented: {0}")]
    NotImplementedFeature(String),

    /// Node or edge cap breached
    #[error("Resource limit exceeded: {resource} count {actual} exceeds limit {limit}")]
    ResourceLimitExceeded {
        resource: &'static str,
        actual: usize,
        limit: usize,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// XML writer/reader error
    #[error("XML error: {0}")]
    Xml(String),

    /// Signal source error
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl NetworkError {
    /// Create an invariant violation
    pub fn invariant(msg: impl Into<String>) -> Self {
        NetworkError::InvariantViolation(msg.into())
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        NetworkError::InvalidParameter(msg.into())
    }

    /// Create an XML error
    pub fn xml(msg: impl Into<String>) -> Self {
        NetworkError::Xml(msg.into())
    }

    /// True only for conditions the caller may log and continue past
    pub fn is_recoverable(&self) -> bool {
        matches!(self, NetworkError::InvariantViolation(_))
    }
}

impl From<quick_xml::Error> for NetworkError {
    fn from(err: quick_xml::Error) -> Self {
        NetworkError::Xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for NetworkError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        NetworkError::Xml(err.to_string())
    }
}

/// Result type alias for network operations
pub type Result<T> = std::result::Result<T, NetworkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_invariant_violation_is_recoverable() {
        assert!(NetworkError::invariant("edge a-b joins two websites").is_recoverable());
        assert!(!NetworkError::UnknownNode("x".into()).is_recoverable());
        assert!(!NetworkError::UnsupportedFormat("dot".into()).is_recoverable());
    }

    #[test]
    fn test_display_messages() {
        let err = NetworkError::MissingParameter {
            algorithm: "top_k",
            parameter: "k",
        };
        assert_eq!(err.to_string(), "Algorithm 'top_k' requires parameter 'k'");

        let err = NetworkError::ResourceLimitExceeded {
            resource: "node",
            actual: 11,
            limit: 10,
        };
        assert!(err.to_string().contains("node count 11 exceeds limit 10"));

        let err = NetworkError::DuplicateNode {
            id: "keyword_x".into(),
            existing: NodeType::Keyword,
            requested: NodeType::Entity,
        };
        assert!(err.to_string().contains("exists as 'keyword'"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: NetworkError = io.into();
        assert!(matches!(err, NetworkError::Io(_)));
    }
}
