//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Invalid timestamp format.
    #[error("Invalid timestamp: {0}. Use YYYY-MM-DDTHH:MM[:SS] or YYYY-MM-DD.")]
    InvalidTimestamp(String),

    /// Configuration error.
    #[error("Configuration error in {path}: {reason}")]
    Config {
        /// File being read
        path: PathBuf,
        /// What went wrong
        reason: String,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
