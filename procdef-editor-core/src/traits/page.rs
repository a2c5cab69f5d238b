//! Page (DOM) abstract Trait

use std::time::Duration;

use async_trait::async_trait;

use crate::error::EditorResult;
use crate::types::FormState;

/// The parts of the editor page the controller reads and mutates.
///
/// Implementations:
/// - `DomPage` (web-sys, wasm32)
/// - `MemoryPage` (headless hosts and tests)
#[async_trait(?Send)]
pub trait EditorPage {
    /// Current name/value pairs of the process definition form.
    fn form_state(&self) -> EditorResult<FormState>;

    /// The form's `action` attribute, used as the endpoint unless configured otherwise.
    fn form_action(&self) -> EditorResult<String>;

    /// Fade the textarea out; resolves once it is fully hidden.
    async fn fade_out_text(&self, duration: Duration) -> EditorResult<()>;

    /// Fade the textarea in; resolves once it is fully visible.
    async fn fade_in_text(&self, duration: Duration) -> EditorResult<()>;

    /// Append the highlighted HTML fragment to the preview container.
    fn append_preview(&self, html: &str) -> EditorResult<()>;

    /// Remove every preview fragment element, returning how many were removed.
    fn remove_preview(&self) -> EditorResult<usize>;
}

/// The click event that triggered an operation.
pub trait UiEvent {
    /// Stop the browser from performing the native form submission.
    fn prevent_default(&self);
}

/// Event for callers that have nothing to suppress (keyboard shortcuts, tests).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEvent;

impl UiEvent for NoopEvent {
    fn prevent_default(&self) {}
}
