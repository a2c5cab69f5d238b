//! Action discriminator and the per-click request built from it

use std::fmt;

use serde::{Deserialize, Serialize};

use super::form::{encode_pair, FormState};

/// Which server-side operation a submission asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Validate,
    ValidateAndSave,
    ToggleHighlight,
}

impl Action {
    /// Value sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Validate => "validate",
            Self::ValidateAndSave => "validate_and_save",
            Self::ToggleHighlight => "toggle_highlight",
        }
    }

    /// Whether the client-side validator must pass before submitting.
    pub fn requires_validation(self) -> bool {
        !matches!(self, Self::ToggleHighlight)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the action discriminator is appended to the form payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionEncoding {
    /// `action=<name>`
    #[default]
    Field,
    /// `<name>=true`, as sent by the older admin pages.
    LegacyFlag,
}

/// One submission: the serialized form tagged with an action.
///
/// Built fresh for every click and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRequest {
    pub action: Action,
    pub fields: FormState,
    /// Per-controller dispatch counter, starts at 1.
    pub seq: u64,
    /// Tells transports that render their own error banners to stay quiet.
    pub suppress_error_banner: bool,
}

impl ActionRequest {
    pub fn new(action: Action, fields: FormState, seq: u64) -> Self {
        Self {
            action,
            fields,
            seq,
            suppress_error_banner: matches!(action, Action::ToggleHighlight),
        }
    }

    /// URL-encoded body: the form fields followed by the discriminator.
    pub fn encode(&self, encoding: ActionEncoding) -> String {
        let discriminator = match encoding {
            ActionEncoding::Field => encode_pair("action", self.action.as_str()),
            ActionEncoding::LegacyFlag => encode_pair(self.action.as_str(), "true"),
        };
        let fields = self.fields.to_urlencoded();
        if fields.is_empty() {
            discriminator
        } else {
            format!("{fields}&{discriminator}")
        }
    }
}
