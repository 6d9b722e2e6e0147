//! Centralized constants
//!
//! Defaults that more than one feature relies on live here so builders,
//! backboning and the pipeline agree on them.

/// Node identifier rules
pub mod node_id {
    /// Sanitized ids are truncated to this many characters
    pub const MAX_LEN: usize = 200;

    /// Characters replaced by `_` during sanitization
    pub const REPLACED_CHARS: [char; 6] = [' ', '/', ':', '?', '&', '='];

    pub const QUERY_PREFIX: &str = "query";
    pub const WEBSITE_PREFIX: &str = "website";
    pub const KEYWORD_PREFIX: &str = "keyword";
    pub const ENTITY_PREFIX: &str = "entity";
}

/// Hard caps checked right after a build
pub mod limits {
    pub const DEFAULT_MAX_NODES: usize = 10_000;
    pub const DEFAULT_MAX_EDGES: usize = 50_000;
}

/// Backboning defaults
pub mod backbone {
    /// Disparity filter significance level
    pub const DEFAULT_ALPHA: f64 = 0.05;

    /// Attribute name that maps to the edge weight itself
    pub const WEIGHT_ATTR: &str = "weight";
}

/// Centrality iteration limits
pub mod centrality {
    pub const EIGENVECTOR_MAX_ITERATIONS: usize = 100;
    pub const EIGENVECTOR_TOLERANCE: f64 = 1e-6;

    /// Below this many nodes per-source traversals stay sequential
    pub const PARALLEL_THRESHOLD: usize = 256;
}
