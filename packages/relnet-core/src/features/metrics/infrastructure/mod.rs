//! Metric computations

mod basic;
mod centrality;
mod components;

pub use basic::{degree_stats, density, node_type_histogram, weight_stats};
pub use centrality::{
    betweenness_centrality, closeness_centrality, degree_centrality, eigenvector_centrality,
};
pub use components::component_stats;
