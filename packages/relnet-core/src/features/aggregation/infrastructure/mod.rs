//! Aggregation infrastructure

mod aggregator;

pub use aggregator::{select_top_k, DomainAggregator};
