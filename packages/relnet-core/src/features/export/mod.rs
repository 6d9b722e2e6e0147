//! Graph export
//!
//! | format     | content                                        |
//! |------------|------------------------------------------------|
//! | `gexf`     | GEXF 1.2, every non-null attribute (default)   |
//! | `graphml`  | GraphML, every non-null attribute              |
//! | `edgelist` | `source\ttarget\tweight`, no header, ids escaped |
//! | `csv`      | `Source,Target,Weight`                         |
//! | `json`     | node-link (`directed`, `graph`, `nodes`, `links`) |
//!
//! Null attributes are dropped before writing, never defaulted.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{export, export_as, read_gexf, read_node_link_json};
pub use domain::{ExportFormat, ExportStats};
