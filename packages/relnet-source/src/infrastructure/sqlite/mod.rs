//! SQLite adapter for SignalSource
//!
//! Reads an exported signal database with three tables (see [`SCHEMA`]).
//! Each fetch is a single `SELECT ... WHERE session_id IN (...)` so a build
//! never issues one query per node.

use async_trait::async_trait;
use rusqlite::types::FromSql;
use rusqlite::{params_from_iter, Connection, Row};
use std::path::Path;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::{EntityRow, KeywordRow, SearchResultRow, SessionId, SignalSource};
use crate::{Result, SourceError};

/// Table layout expected by the adapter
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS search_results (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    session_id INTEGER NOT NULL,
    query_id INTEGER NOT NULL,
    query_text TEXT NOT NULL,
    result_url TEXT NOT NULL,
    result_domain TEXT,
    result_title TEXT,
    rank INTEGER NOT NULL
);
CREATE TABLE IF NOT EXISTS content_keywords (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    session_id INTEGER NOT NULL,
    content_id INTEGER NOT NULL,
    url TEXT NOT NULL,
    domain TEXT,
    lemma TEXT NOT NULL,
    frequency INTEGER NOT NULL,
    tfidf_score REAL NOT NULL,
    language TEXT,
    ngram INTEGER
);
CREATE TABLE IF NOT EXISTS content_entities (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    session_id INTEGER NOT NULL,
    content_id INTEGER NOT NULL,
    url TEXT NOT NULL,
    domain TEXT,
    entity_text TEXT NOT NULL,
    entity_label TEXT NOT NULL,
    frequency INTEGER NOT NULL,
    confidence REAL NOT NULL,
    language TEXT
);
"#;

pub struct SqliteSignalSource {
    conn: Mutex<Connection>,
}

impl SqliteSignalSource {
    /// Open a database file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        Ok(Self::from_connection(conn))
    }

    /// Open a private in-memory database (fixtures)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self::from_connection(conn))
    }

    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Create the expected tables if missing
    pub async fn create_schema(&self) -> Result<()> {
        let conn = self.conn.lock().await;
        conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Run raw SQL against the underlying connection (fixtures)
    pub async fn execute_batch(&self, sql: &str) -> Result<()> {
        let conn = self.conn.lock().await;
        conn.execute_batch(sql)?;
        Ok(())
    }

    async fn query<T: Send>(
        &self,
        sql_prefix: &str,
        session_ids: &[SessionId],
        map: fn(&Row<'_>) -> Result<T>,
    ) -> Result<Vec<T>> {
        if session_ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; session_ids.len()].join(", ");
        let sql = format!(
            "{} WHERE session_id IN ({}) ORDER BY session_id, id",
            sql_prefix, placeholders
        );

        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(&sql)?;
        let mut cursor = stmt.query(params_from_iter(session_ids.iter()))?;
        let mut rows = Vec::new();
        while let Some(row) = cursor.next()? {
            rows.push(map(row)?);
        }

        debug!(rows = rows.len(), sessions = session_ids.len(), "sqlite batch fetch");
        Ok(rows)
    }
}

/// Read a column the row contract requires, naming it when it is NULL
fn required<T: FromSql>(row: &Row<'_>, table: &str, idx: usize, column: &str) -> Result<T> {
    row.get::<_, Option<T>>(idx)?
        .ok_or_else(|| SourceError::invalid_row(table, column, "NULL"))
}

/// Counts are stored as INTEGER; a negative one cannot come from extraction
fn frequency(row: &Row<'_>, table: &str, idx: usize) -> Result<i64> {
    let value: i64 = required(row, table, idx, "frequency")?;
    if value < 0 {
        return Err(SourceError::invalid_row(table, "frequency", format!("negative ({})", value)));
    }
    Ok(value)
}

fn map_search_row(row: &Row<'_>) -> Result<SearchResultRow> {
    const TABLE: &str = "search_results";
    Ok(SearchResultRow {
        session_id: row.get(0)?,
        query_id: required(row, TABLE, 1, "query_id")?,
        query_text: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        result_url: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        result_domain: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        result_title: row.get(5)?,
        rank: required(row, TABLE, 6, "rank")?,
    })
}

fn map_keyword_row(row: &Row<'_>) -> Result<KeywordRow> {
    const TABLE: &str = "content_keywords";
    Ok(KeywordRow {
        session_id: row.get(0)?,
        content_id: required(row, TABLE, 1, "content_id")?,
        url: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        domain: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        lemma: required(row, TABLE, 4, "lemma")?,
        frequency: frequency(row, TABLE, 5)?,
        tfidf_score: required(row, TABLE, 6, "tfidf_score")?,
        language: row.get(7)?,
        ngram: row.get(8)?,
    })
}

fn map_entity_row(row: &Row<'_>) -> Result<EntityRow> {
    const TABLE: &str = "content_entities";
    Ok(EntityRow {
        session_id: row.get(0)?,
        content_id: required(row, TABLE, 1, "content_id")?,
        url: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        domain: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        entity_text: required(row, TABLE, 4, "entity_text")?,
        entity_label: required(row, TABLE, 5, "entity_label")?,
        frequency: frequency(row, TABLE, 6)?,
        confidence: required(row, TABLE, 7, "confidence")?,
        language: row.get(8)?,
    })
}

#[async_trait]
impl SignalSource for SqliteSignalSource {
    async fn fetch_search_results(&self, session_ids: &[SessionId]) -> Result<Vec<SearchResultRow>> {
        self.query(
            "SELECT session_id, query_id, query_text, result_url, result_domain, result_title, rank \
             FROM search_results",
            session_ids,
            map_search_row,
        )
        .await
    }

    async fn fetch_keywords(&self, session_ids: &[SessionId]) -> Result<Vec<KeywordRow>> {
        self.query(
            "SELECT session_id, content_id, url, domain, lemma, frequency, tfidf_score, language, ngram \
             FROM content_keywords",
            session_ids,
            map_keyword_row,
        )
        .await
    }

    async fn fetch_entities(&self, session_ids: &[SessionId]) -> Result<Vec<EntityRow>> {
        self.query(
            "SELECT session_id, content_id, url, domain, entity_text, entity_label, frequency, confidence, language \
             FROM content_entities",
            session_ids,
            map_entity_row,
        )
        .await
    }
}
