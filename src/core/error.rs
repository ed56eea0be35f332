//! Error types for the core module
//!
//! Covers the only fallible subsystem: board configuration persistence.
//! The march logic itself is total and has no error states.

use thiserror::Error;

/// Errors that can occur while loading the board configuration
#[derive(Error, Debug)]
pub enum CoreError {
    /// Config file I/O error
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config deserialization error
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
