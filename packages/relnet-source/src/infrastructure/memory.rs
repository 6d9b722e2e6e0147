//! In-memory SignalSource
//!
//! Holds rows in insertion order and filters them by session id. Every fetch
//! is counted so callers can assert the one-batch-per-build contract.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::{EntityRow, KeywordRow, SearchResultRow, SessionId, SignalSource};
use crate::Result;

#[derive(Debug, Default)]
pub struct InMemorySignalSource {
    search_results: Vec<SearchResultRow>,
    keywords: Vec<KeywordRow>,
    entities: Vec<EntityRow>,
    fetches: AtomicUsize,
}

impl InMemorySignalSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_results(mut self, rows: Vec<SearchResultRow>) -> Self {
        self.search_results.extend(rows);
        self
    }

    pub fn with_keywords(mut self, rows: Vec<KeywordRow>) -> Self {
        self.keywords.extend(rows);
        self
    }

    pub fn with_entities(mut self, rows: Vec<EntityRow>) -> Self {
        self.entities.extend(rows);
        self
    }

    /// Number of fetch calls served so far
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }

    fn select<T: Clone>(
        &self,
        rows: &[T],
        session_ids: &[SessionId],
        session_of: impl Fn(&T) -> SessionId,
    ) -> Vec<T> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        let wanted: HashSet<SessionId> = session_ids.iter().copied().collect();
        rows.iter()
            .filter(|row| wanted.contains(&session_of(row)))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl SignalSource for InMemorySignalSource {
    async fn fetch_search_results(&self, session_ids: &[SessionId]) -> Result<Vec<SearchResultRow>> {
        Ok(self.select(&self.search_results, session_ids, |r| r.session_id))
    }

    async fn fetch_keywords(&self, session_ids: &[SessionId]) -> Result<Vec<KeywordRow>> {
        Ok(self.select(&self.keywords, session_ids, |r| r.session_id))
    }

    async fn fetch_entities(&self, session_ids: &[SessionId]) -> Result<Vec<EntityRow>> {
        Ok(self.select(&self.entities, session_ids, |r| r.session_id))
    }
}
