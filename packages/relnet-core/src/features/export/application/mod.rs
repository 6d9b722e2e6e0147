//! Export use case

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

use crate::errors::Result;
use crate::features::export::domain::{ExportFormat, ExportStats};
use crate::features::export::infrastructure::{
    parse_gexf, parse_node_link, write_csv, write_edgelist, write_gexf, write_graphml,
    write_node_link,
};
use crate::shared::models::Graph;

/// Write `graph` to `path` in the named format
///
/// The format name is checked before the file is created, so an unknown
/// format leaves the filesystem untouched.
pub fn export(graph: &Graph, path: impl AsRef<Path>, format: &str) -> Result<ExportStats> {
    let format: ExportFormat = format.parse()?;
    export_as(graph, path, format)
}

pub fn export_as(graph: &Graph, path: impl AsRef<Path>, format: ExportFormat) -> Result<ExportStats> {
    let path = path.as_ref();
    let clean = graph.without_null_attrs();

    let out = BufWriter::new(File::create(path)?);
    match format {
        ExportFormat::Gexf => write_gexf(&clean, out)?,
        ExportFormat::GraphMl => write_graphml(&clean, out)?,
        ExportFormat::EdgeList => write_edgelist(&clean, out)?,
        ExportFormat::Csv => write_csv(&clean, out)?,
        ExportFormat::Json => write_node_link(&clean, out)?,
    }

    let stats = ExportStats {
        file_size: fs::metadata(path)?.len(),
        node_count: clean.node_count(),
        edge_count: clean.edge_count(),
        format,
    };
    info!(
        path = %path.display(),
        format = %format,
        nodes = stats.node_count,
        edges = stats.edge_count,
        bytes = stats.file_size,
        "network exported"
    );
    Ok(stats)
}

/// Re-read a GEXF file written by [`export`]
pub fn read_gexf(path: impl AsRef<Path>) -> Result<Graph> {
    parse_gexf(&fs::read_to_string(path)?)
}

/// Re-read a node-link JSON file written by [`export`]
pub fn read_node_link_json(path: impl AsRef<Path>) -> Result<Graph> {
    parse_node_link(&fs::read_to_string(path)?)
}
