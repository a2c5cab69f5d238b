//! Textarea/preview toggle state

use serde::{Deserialize, Serialize};

/// Whether the raw textarea or the highlighted preview is on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviewState {
    #[default]
    Editing,
    Previewing,
}

impl PreviewState {
    /// The state a successful toggle response moves to.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Editing => Self::Previewing,
            Self::Previewing => Self::Editing,
        }
    }
}
