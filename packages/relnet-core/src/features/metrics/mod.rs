//! Network metrics
//!
//! Read-only statistics over a finished graph.
//!
//! - Counts, density, degree and weight statistics, node-type histogram
//! - Connected components (undirected graphs only)
//! - Centrality: degree always, betweenness/closeness/eigenvector on request
//!
//! Results never depend on iteration order: parallel traversals are reduced
//! in node order and rankings break ties by node id.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{centrality_scores, compute_summary, top_nodes};
pub use domain::{
    CentralityScores, ComponentStats, DegreeStats, NetworkSummary, RankedNode, TopNode,
    WeightStats,
};
pub use infrastructure::{
    betweenness_centrality, closeness_centrality, component_stats, degree_centrality,
    degree_stats, density, eigenvector_centrality, node_type_histogram, weight_stats,
};
