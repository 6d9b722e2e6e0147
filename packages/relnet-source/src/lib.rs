//! relnet-source - Signal rows feeding the relevance network builders
//!
//! The relational store holding search rankings, keywords and named entities
//! lives outside this workspace. This crate pins down the row shapes the
//! builders consume and the [`SignalSource`] port used to fetch them.
//!
//! ## Contract
//!
//! 1. **One batch per build**: every builder invocation issues exactly one
//!    fetch call covering all of its session ids, never one call per node.
//! 2. **Rows are pre-extracted**: keyword scores and entity confidences are
//!    computed upstream and passed through untouched.
//! 3. **Stable order**: adapters return rows in a deterministic order so that
//!    insertion-order tie-breaks in the builders are reproducible.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use relnet_source::{InMemorySignalSource, SignalSource, SearchResultRow};
//!
//! let source = InMemorySignalSource::new()
//!     .with_search_results(vec![SearchResultRow::new(1, 10, "climate", "https://a.org/x", 1)]);
//!
//! let rows = source.fetch_search_results(&[1]).await?;
//! ```

pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::{Result, SourceError};

pub use domain::{EntityRow, KeywordRow, SearchResultRow, SessionId, SignalSource};
pub use infrastructure::memory::InMemorySignalSource;

#[cfg(feature = "sqlite")]
pub use infrastructure::sqlite::SqliteSignalSource;
