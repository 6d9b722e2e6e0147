//! Infrastructure adapters for SignalSource
//!
//! - `memory`: in-process rows (tests, embedding callers)
//! - `sqlite`: read-only adapter over an exported signal database

pub mod memory;

#[cfg(feature = "sqlite")]
pub mod sqlite;
