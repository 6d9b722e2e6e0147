//! Domain layer for signal sources
//!
//! # Row Models
//!
//! - `SearchResultRow`: one ranked search hit for a query
//! - `KeywordRow`: one lemma observed in one piece of scraped content
//! - `EntityRow`: one named entity observed in one piece of scraped content
//!
//! # Port Trait
//!
//! - `SignalSource`: batch fetch of rows for a set of collection sessions

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Collection session identifier
pub type SessionId = i64;

// ═══════════════════════════════════════════════════════════════════════════
// Row Models
// ═══════════════════════════════════════════════════════════════════════════

/// Ranked search result for a query
///
/// # Examples
///
/// ```rust
/// use relnet_source::SearchResultRow;
///
/// let row = SearchResultRow::new(1, 7, "climate policy", "https://www.example.org/a", 3);
/// assert_eq!(row.rank, 3);
/// assert_eq!(row.result_domain, "");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultRow {
    pub session_id: SessionId,
    pub query_id: i64,
    pub query_text: String,
    pub result_url: String,
    /// Registered domain; empty when the upstream store did not record one
    #[serde(default)]
    pub result_domain: String,
    #[serde(default)]
    pub result_title: Option<String>,
    /// 1-based rank within the result page
    pub rank: i64,
}

impl SearchResultRow {
    pub fn new(
        session_id: SessionId,
        query_id: i64,
        query_text: impl Into<String>,
        result_url: impl Into<String>,
        rank: i64,
    ) -> Self {
        Self {
            session_id,
            query_id,
            query_text: query_text.into(),
            result_url: result_url.into(),
            result_domain: String::new(),
            result_title: None,
            rank,
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.result_domain = domain.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.result_title = Some(title.into());
        self
    }
}

/// Lemma extracted from a scraped document
///
/// `tfidf_score` is whatever score the extraction layer attached (TF-IDF,
/// RAKE, ...). It is passed through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRow {
    pub session_id: SessionId,
    pub content_id: i64,
    pub url: String,
    #[serde(default)]
    pub domain: String,
    pub lemma: String,
    pub frequency: i64,
    pub tfidf_score: f64,
    #[serde(default)]
    pub language: Option<String>,
    /// Number of tokens in the lemma (1 for unigrams)
    #[serde(default)]
    pub ngram: Option<u32>,
}

impl KeywordRow {
    pub fn new(
        session_id: SessionId,
        content_id: i64,
        url: impl Into<String>,
        lemma: impl Into<String>,
        frequency: i64,
        tfidf_score: f64,
    ) -> Self {
        Self {
            session_id,
            content_id,
            url: url.into(),
            domain: String::new(),
            lemma: lemma.into(),
            frequency,
            tfidf_score,
            language: None,
            ngram: None,
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_ngram(mut self, ngram: u32) -> Self {
        self.ngram = Some(ngram);
        self
    }
}

/// Named entity extracted from a scraped document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRow {
    pub session_id: SessionId,
    pub content_id: i64,
    pub url: String,
    #[serde(default)]
    pub domain: String,
    pub entity_text: String,
    /// Entity type label (PER, ORG, LOC, ...)
    pub entity_label: String,
    pub frequency: i64,
    pub confidence: f64,
    #[serde(default)]
    pub language: Option<String>,
}

impl EntityRow {
    pub fn new(
        session_id: SessionId,
        content_id: i64,
        url: impl Into<String>,
        entity_text: impl Into<String>,
        entity_label: impl Into<String>,
        frequency: i64,
        confidence: f64,
    ) -> Self {
        Self {
            session_id,
            content_id,
            url: url.into(),
            domain: String::new(),
            entity_text: entity_text.into(),
            entity_label: entity_label.into(),
            frequency,
            confidence,
            language: None,
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Port Trait
// ═══════════════════════════════════════════════════════════════════════════

/// Batch access to pre-extracted research signals
///
/// Each method is called at most once per builder invocation with the full
/// list of session ids. Implementations must answer with a single round-trip
/// and return rows in a stable order (session, then document, then
/// insertion order in the store).
#[async_trait]
pub trait SignalSource: Send + Sync {
    /// Ranked search results for all queries of the given sessions
    async fn fetch_search_results(&self, session_ids: &[SessionId]) -> Result<Vec<SearchResultRow>>;

    /// Keyword observations for all content scraped in the given sessions
    async fn fetch_keywords(&self, session_ids: &[SessionId]) -> Result<Vec<KeywordRow>>;

    /// Entity observations for all content scraped in the given sessions
    async fn fetch_entities(&self, session_ids: &[SessionId]) -> Result<Vec<EntityRow>>;
}
