//! Domain aggregation
//!
//! Collapses per-document term observations into per-unit terms (a unit is a
//! domain when aggregating, otherwise a single document) and selects the
//! top-K terms of each unit.

pub mod domain;
pub mod infrastructure;

pub use domain::{AggregatedTerm, TermKey, TermObservation, UnitTerms};
pub use infrastructure::{select_top_k, DomainAggregator};
