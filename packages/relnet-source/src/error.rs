//! Source errors
//!
//! Adapters fail for one of three reasons: the backend refused the query,
//! a stored row cannot become a signal row, or the file could not be read.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Backend query or connection failure
    Database,
    /// Stored row violates the row contract (NULL or out-of-range column)
    InvalidRow,
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::Database => "database",
            ErrorKind::InvalidRow => "invalid_row",
            ErrorKind::Io => "io",
        })
    }
}

#[derive(Debug, Error)]
#[error("[{kind}] {message}")]
pub struct SourceError {
    pub kind: ErrorKind,
    pub message: String,
    #[source]
    pub cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SourceError {
    fn from_cause(
        kind: ErrorKind,
        message: String,
        cause: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message,
            cause: Some(Box::new(cause)),
        }
    }

    /// A stored row that cannot be turned into a signal row
    pub fn invalid_row(table: &str, column: &str, problem: impl fmt::Display) -> Self {
        Self {
            kind: ErrorKind::InvalidRow,
            message: format!("{}.{}: {}", table, column, problem),
            cause: None,
        }
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for SourceError {
    fn from(err: rusqlite::Error) -> Self {
        Self::from_cause(ErrorKind::Database, format!("sqlite: {}", err), err)
    }
}

impl From<std::io::Error> for SourceError {
    fn from(err: std::io::Error) -> Self {
        Self::from_cause(ErrorKind::Io, err.to_string(), err)
    }
}

pub type Result<T> = std::result::Result<T, SourceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn invalid_row_names_table_and_column() {
        let err = SourceError::invalid_row("search_results", "rank", "NULL");
        assert_eq!(err.kind, ErrorKind::InvalidRow);
        assert_eq!(err.to_string(), "[invalid_row] search_results.rank: NULL");
        assert!(err.source().is_none());
    }

    #[test]
    fn io_error_keeps_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: SourceError = io.into();
        assert_eq!(err.kind, ErrorKind::Io);
        assert!(err.source().unwrap().to_string().contains("denied"));
    }

    #[cfg(feature = "sqlite")]
    #[test]
    fn sqlite_error_is_database_kind() {
        let err: SourceError = rusqlite::Error::QueryReturnedNoRows.into();
        assert_eq!(err.kind, ErrorKind::Database);
        assert!(err.to_string().starts_with("[database] sqlite:"));
    }
}
