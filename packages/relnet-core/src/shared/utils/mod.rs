//! Utility modules shared across features
//!
//! - `id_generator`: node id sanitization and typed id construction
//! - `url`: host/domain extraction for result URLs

pub mod id_generator;
pub mod url;

pub use id_generator::{entity_node_id, keyword_node_id, query_node_id, sanitize_node_id, website_node_id};
pub use url::domain_from_url;
