//! Error types for split-file parsing.

use std::path::PathBuf;

/// Errors that can occur while parsing a split file.
#[derive(Debug, thiserror::Error)]
pub enum SplitFileError {
    /// Input path does not exist
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input is not well-formed XML
    #[error("Malformed split file: {0}")]
    Malformed(String),

    /// A required element is absent
    #[error("Missing required field: {0}")]
    MissingField(String),
}
