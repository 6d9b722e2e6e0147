//! CSV and tab-separated edge lists

use std::borrow::Cow;
use std::io::Write;

use crate::errors::Result;
use crate::shared::models::Graph;

fn csv_field(raw: &str) -> String {
    if raw.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

/// Ids keep their spelling unless they contain a delimiter; then tab, CR,
/// LF and backslash are written as `\t`, `\r`, `\n` and `\\`
fn edgelist_field(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['\t', '\n', '\r', '\\']) {
        return Cow::Borrowed(raw);
    }
    let mut escaped = String::with_capacity(raw.len() + 2);
    for c in raw.chars() {
        match c {
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\\' => escaped.push_str("\\\\"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// `Source,Target,Weight` with a header row
pub fn write_csv<W: Write>(graph: &Graph, mut out: W) -> Result<()> {
    writeln!(out, "Source,Target,Weight")?;
    for edge in graph.edges() {
        writeln!(
            out,
            "{},{},{}",
            csv_field(&edge.source),
            csv_field(&edge.target),
            edge.weight
        )?;
    }
    out.flush()?;
    Ok(())
}

/// `source<TAB>target<TAB>weight`, no header
pub fn write_edgelist<W: Write>(graph: &Graph, mut out: W) -> Result<()> {
    for edge in graph.edges() {
        writeln!(
            out,
            "{}\t{}\t{}",
            edgelist_field(&edge.source),
            edgelist_field(&edge.target),
            edge.weight
        )?;
    }
    out.flush()?;
    Ok(())
}
