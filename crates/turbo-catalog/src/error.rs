//! Catalog error types.

use thiserror::Error;

/// Errors that can occur while loading a catalog document.
///
/// Parsing is all-or-nothing: any of these means no document was produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The catalog source itself is unavailable.
    #[error("Catalog source not found: {source_name}")]
    NotFound { source_name: String },

    /// Required fields are absent or mistyped somewhere in the document.
    #[error("Malformed catalog structure at line {line}, column {column}: {message}")]
    MalformedStructure {
        message: String,
        line: usize,
        column: usize,
    },

    /// The source exists but could not be read.
    #[error("Failed to read catalog source: {0}")]
    Io(String),
}

impl ParseError {
    /// Build a `NotFound` error for a named source.
    pub fn not_found(source_name: impl Into<String>) -> Self {
        ParseError::NotFound {
            source_name: source_name.into(),
        }
    }

    /// Check whether the source was missing (as opposed to malformed).
    pub fn is_not_found(&self) -> bool {
        matches!(self, ParseError::NotFound { .. })
    }

    /// Check whether the document shape was rejected.
    pub fn is_malformed(&self) -> bool {
        matches!(self, ParseError::MalformedStructure { .. })
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(e: serde_json::Error) -> Self {
        ParseError::MalformedStructure {
            message: e.to_string(),
            line: e.line(),
            column: e.column(),
        }
    }
}
