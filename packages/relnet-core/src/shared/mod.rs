//! Shared module - Common types and utilities
//!
//! Graph model, id helpers and constants used by every feature.

#[macro_use]
pub mod macros;
pub mod constants;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use models::*;
pub use utils::id_generator::sanitize_node_id;
