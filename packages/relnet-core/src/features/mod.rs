//! Feature modules - each feature follows Hexagonal Architecture
//!
//! Each feature contains:
//! - domain/         - Types and rules, no IO
//! - infrastructure/ - Algorithms and format codecs
//! - application/    - Use cases callers invoke
//!
//! `weighting` and `aggregation` are building blocks used by
//! `network_builders`; they carry only a domain layer (plus the aggregator).

pub mod aggregation;
pub mod backboning;
pub mod export;
pub mod metrics;
pub mod network_builders;
pub mod weighting;
