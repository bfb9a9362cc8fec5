//! Shared module - Common types and utilities
//!
//! This module contains types that are shared across all features: the
//! program AST the knowledge base is populated from, statement typing, the
//! deduplicated-insert primitive every relation index is built on, and graph
//! reachability for closure relations.

pub mod models;
pub mod utils;

// Re-exports for convenience
pub use models::*;
pub use utils::dedup::{deduplicated_insert, DedupList};
pub use utils::reachability::{reachable_from, reachable_weights};
