//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::types::FieldError;

/// Editor error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum EditorError {
    /// Client-side field validation failed
    #[error("Validation failed: {}", join_field_errors(.0))]
    Validation(Vec<FieldError>),

    /// The network exchange itself failed (connection refused, timeout, unreadable body).
    ///
    /// Server-reported failures are not errors; they arrive as a non-"OK" status text.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The page is missing an element or could not be mutated
    #[error("Page error: {0}")]
    Page(String),

    /// Browser navigation failed
    #[error("Navigation error: {0}")]
    Navigation(String),

    /// Invalid configuration or missing adapter
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl EditorError {
    /// Whether this is expected behavior (user input, server said no), used for log levels.
    ///
    /// `true` should be logged at `warn`, `false` at `error`.
    /// **Update this when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<serde_json::Error> for EditorError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

/// Editor Result type alias
pub type EditorResult<T> = std::result::Result<T, EditorError>;
