//! Backbone extraction
//!
//! Pure functions `&Graph -> (Graph, BackboneStats)`. The input graph is never
//! touched; every call returns a pruned copy with isolated nodes removed.
//!
//! - `disparity_filter`: per-node significance test (Serrano et al., 2009),
//!   an edge is dropped if either endpoint finds it insignificant
//! - `threshold`: drop edges below a value
//! - `top_k`: keep the k heaviest edges
//! - `dispatch`: pick one by name

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{disparity_filter, dispatch, threshold, top_k};
pub use domain::{BackboneAlgorithm, BackboneParams, BackboneStats};
pub use infrastructure::{disparity_scores, DisparityScore};
