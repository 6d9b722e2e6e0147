//! Format writers and readers
//!
//! Writers expect a graph already stripped of null attributes.

mod gexf;
mod graphml;
mod node_link;
mod tabular;
mod values;

pub use gexf::{parse_gexf, write_gexf};
pub use graphml::write_graphml;
pub use node_link::{parse_node_link, write_node_link};
pub use tabular::{write_csv, write_edgelist};
