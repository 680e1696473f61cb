//! Error types for model generation.

use std::path::PathBuf;

/// Errors that can occur while generating models.
#[derive(Debug, thiserror::Error)]
pub enum ReverseError {
    /// IO error (reading the schema, writing generated files).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The schema document could not be parsed.
    #[error("Failed to parse schema file '{path}': {source}")]
    Schema {
        /// Path to the schema document.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The package name is not a valid Go identifier.
    #[error("Invalid package name: '{0}'")]
    InvalidPackage(String),

    /// The schema document contains no tables.
    #[error("No tables found in schema file '{0}'")]
    NoTables(PathBuf),
}

/// Result type for model generation.
pub type Result<T> = std::result::Result<T, ReverseError>;
