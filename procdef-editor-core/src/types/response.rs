//! Transport responses and what the controller made of them

use serde::{Deserialize, Serialize};

use super::action::Action;
use super::form::FieldError;
use crate::error::{EditorError, EditorResult};

/// Status text that marks a successful exchange.
pub const STATUS_OK: &str = "OK";

/// Raw result of a network exchange, as handed back by a [`Transport`](crate::traits::Transport).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportResponse {
    pub status_text: String,
    pub response_text: String,
}

impl TransportResponse {
    pub fn new(status_text: impl Into<String>, response_text: impl Into<String>) -> Self {
        Self {
            status_text: status_text.into(),
            response_text: response_text.into(),
        }
    }

    /// A successful response carrying `response_text`.
    pub fn ok(response_text: impl Into<String>) -> Self {
        Self::new(STATUS_OK, response_text)
    }

    pub fn is_ok(&self) -> bool {
        self.status_text == STATUS_OK
    }

    /// Attach the action that produced this response.
    pub fn into_outcome(self, kind: Action) -> ResponseOutcome {
        ResponseOutcome {
            kind,
            success: self.is_ok(),
            payload: self.response_text,
        }
    }
}

/// Typed response contract.
///
/// `payload` is a redirect location for a successful save, an HTML fragment
/// for a successful highlight, and a human-readable message otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseOutcome {
    pub kind: Action,
    pub success: bool,
    pub payload: String,
}

/// What a controller operation did, returned to whoever spawned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionOutcome {
    /// Client-side validation failed; nothing was sent.
    Blocked { errors: Vec<FieldError> },
    /// A banner was shown.
    Notified { success: bool, message: String },
    /// The browser was sent to `location`, replacing the current history entry.
    Navigated { location: String },
    /// The textarea was faded out and the highlighted fragment inserted.
    PreviewShown,
    /// The fragment was removed and the textarea faded back in.
    PreviewHidden,
    /// A toggle response arrived after a newer toggle was dispatched and was dropped.
    Discarded { seq: u64 },
}

impl ActionOutcome {
    /// Turn a validation block into `EditorError::Validation`, for callers
    /// that treat "nothing was sent" as a failure.
    pub fn into_result(self) -> EditorResult<Self> {
        match self {
            Self::Blocked { errors } => Err(EditorError::Validation(errors)),
            other => Ok(other),
        }
    }
}
