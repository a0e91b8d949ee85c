//! Error taxonomy for schema analysis.
//!
//! | Error | Raised when | Recoverable |
//! |-------|-------------|-------------|
//! | `MissingName` | The schema has no non-empty `name` | No |
//! | `MalformedInput` | Raw text is not valid structured data | No |
//! | `UnknownConcept` | A concept key is not in the registry | No (programmer error) |
//!
//! Analysis is pure, so there are no retries and no partial results: a
//! caller either receives a complete result or one of these errors.

use thiserror::Error;

/// Errors that can occur while analyzing a function schema.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Schema must include a non-empty 'name' field")]
    MissingName,

    #[error("Malformed schema input: {0}")]
    MalformedInput(#[from] serde_json::Error),

    #[error("Unknown concept key: {0}")]
    UnknownConcept(String),
}

impl AnalysisError {
    /// Check if this error came from the input transport rather than schema content.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, AnalysisError::MalformedInput(_))
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, AnalysisError>;
