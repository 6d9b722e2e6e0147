//! Metric result types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DegreeStats {
    pub min: usize,
    pub avg: f64,
    pub max: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightStats {
    pub min: f64,
    pub avg: f64,
    pub max: f64,
    pub sum: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentStats {
    pub count: usize,
    pub largest_size: usize,
    /// `largest_size / node_count`
    pub largest_fraction: f64,
}

/// Per-node centrality, indexed by node position
///
/// A measure that was not requested, or did not converge, is `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CentralityScores {
    pub degree: Vec<f64>,
    pub betweenness: Option<Vec<f64>>,
    pub closeness: Option<Vec<f64>>,
    pub eigenvector: Option<Vec<f64>>,
}

impl CentralityScores {
    /// `(name, scores)` for every available measure
    pub fn measures(&self) -> Vec<(&'static str, &[f64])> {
        let mut out = vec![("degree", self.degree.as_slice())];
        if let Some(v) = &self.betweenness {
            out.push(("betweenness", v.as_slice()));
        }
        if let Some(v) = &self.closeness {
            out.push(("closeness", v.as_slice()));
        }
        if let Some(v) = &self.eigenvector {
            out.push(("eigenvector", v.as_slice()));
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedNode {
    pub id: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopNode {
    pub id: String,
    pub label: String,
    pub degree: usize,
    /// Sum of incident edge weights
    pub strength: f64,
}

/// Everything a caller usually wants to know about one network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSummary {
    pub node_count: usize,
    pub edge_count: usize,
    pub directed: bool,
    pub density: f64,
    pub degree: DegreeStats,
    pub node_types: BTreeMap<String, usize>,
    /// `None` for directed graphs
    pub components: Option<ComponentStats>,
    pub weights: WeightStats,
    /// Highest-scoring nodes per computed centrality measure
    pub centrality: BTreeMap<String, Vec<RankedNode>>,
    /// Highest-degree nodes per node type
    pub top_nodes: BTreeMap<String, Vec<TopNode>>,
}
