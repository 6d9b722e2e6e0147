//! Aggregation domain types

use serde::{Deserialize, Serialize};

/// `(term_text, term_label)`; keywords use an empty label
pub type TermKey = (String, String);

/// One term seen in one document
#[derive(Debug, Clone, PartialEq)]
pub struct TermObservation {
    /// Grouping unit (domain or per-document key)
    pub unit: String,
    /// Source document
    pub document: i64,
    pub text: String,
    pub label: String,
    pub frequency: i64,
    /// TF-IDF-like score or extraction confidence
    pub score: f64,
    pub language: Option<String>,
}

impl TermObservation {
    pub fn key(&self) -> TermKey {
        (self.text.clone(), self.label.clone())
    }
}

/// A term after collapsing every observation of one unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedTerm {
    pub text: String,
    pub label: String,
    pub total_frequency: i64,
    pub avg_score: f64,
    /// Distinct documents the term was observed in
    pub doc_count: usize,
    /// First non-empty language seen
    pub language: Option<String>,
}

impl AggregatedTerm {
    /// Ranking key: `avg_score × total_frequency`
    pub fn composite(&self) -> f64 {
        self.avg_score * self.total_frequency as f64
    }
}

/// Terms of one unit, in first-seen order
#[derive(Debug, Clone, PartialEq)]
pub struct UnitTerms {
    pub unit: String,
    pub terms: Vec<AggregatedTerm>,
}
