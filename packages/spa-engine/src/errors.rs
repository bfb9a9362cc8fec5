//! Error types for spa-engine
//!
//! Provides unified error handling across the crate. Only recoverable
//! conditions live here: contract violations inside the knowledge base and
//! the optimiser are assertions, and an empty query result is just an empty
//! slice.

use crate::config::ConfigError;
use thiserror::Error;

/// Main error type for spa-engine operations
#[derive(Debug, Error)]
pub enum SpaError {
    /// The program is well-formed but violates a SIMPLE semantic rule
    #[error("Semantic error: {0}")]
    Semantic(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl SpaError {
    /// Create a semantic error
    pub fn semantic(msg: impl Into<String>) -> Self {
        SpaError::Semantic(msg.into())
    }
}

/// Result type alias for spa-engine operations
pub type Result<T> = std::result::Result<T, SpaError>;
