//! Export formats and statistics

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::NetworkError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Gexf,
    #[serde(rename = "graphml")]
    GraphMl,
    #[serde(rename = "edgelist")]
    EdgeList,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gexf => "gexf",
            Self::GraphMl => "graphml",
            Self::EdgeList => "edgelist",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Conventional file extension
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Gexf => "gexf",
            Self::GraphMl => "graphml",
            Self::EdgeList => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    pub fn all() -> [ExportFormat; 5] {
        [Self::Gexf, Self::GraphMl, Self::EdgeList, Self::Csv, Self::Json]
    }
}

impl Default for ExportFormat {
    fn default() -> Self {
        Self::Gexf
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gexf" => Ok(Self::Gexf),
            "graphml" => Ok(Self::GraphMl),
            "edgelist" => Ok(Self::EdgeList),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(NetworkError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// What one export wrote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportStats {
    pub file_size: u64,
    pub node_count: usize,
    pub edge_count: usize,
    pub format: ExportFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats() {
        for format in ExportFormat::all() {
            assert_eq!(format.as_str().parse::<ExportFormat>().unwrap(), format);
        }
        assert_eq!("GEXF".parse::<ExportFormat>().unwrap(), ExportFormat::Gexf);
        assert!(matches!(
            "dot".parse::<ExportFormat>(),
            Err(NetworkError::UnsupportedFormat(f)) if f == "dot"
        ));
    }

    #[test]
    fn test_serde_names_match() {
        for format in ExportFormat::all() {
            let json = serde_json::to_string(&format).unwrap();
            assert_eq!(json.trim_matches('"'), format.as_str());
        }
    }
}
