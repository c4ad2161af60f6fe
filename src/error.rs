//! Error types for popout

use thiserror::Error;

/// Result type alias for popout operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Highlighter error types
///
/// Every variant is fatal: `main` prints it and exits with status 1.
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Usage: {0} FILE CONFIG")]
    Usage(String),

    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),

    #[error("Error loading syntax configuration: {0}")]
    ConfigParse(String),

    #[error("Unknown color '{color}' in rule '{rule}' (expected one of: {expected})")]
    UnknownColor {
        rule: String,
        color: String,
        expected: String,
    },

    #[error("Invalid pattern in rule '{rule}': {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("File '{0}' not found")]
    InputNotFound(String),

    #[error("Error reading file '{path}': {source}")]
    InputRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
