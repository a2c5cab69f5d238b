//! Process definition editor controller
//!
//! Turns button clicks into submissions and reflects the responses in the page.
//! All operations run on the page's UI thread; the host spawns each one on its
//! local executor and they complete in response-arrival order.

use std::cell::Cell;

use log::{debug, error, info, warn};

use super::EditorContext;
use crate::config::{EditorConfig, StaleResponsePolicy};
use crate::error::EditorResult;
use crate::traits::UiEvent;
use crate::types::{Action, ActionOutcome, ActionRequest, PreviewState, ResponseOutcome};
use crate::utils::log_sanitizer::truncate_for_log;

const MISSING_LOCATION: &str = "The definition was saved but the server did not say where to go next";

/// Controller for the process definition edit form.
///
/// Owns the textarea/preview state; nothing else may change it.
pub struct FormController {
    ctx: EditorContext,
    config: EditorConfig,
    preview: Cell<PreviewState>,
    next_seq: Cell<u64>,
    latest_toggle: Cell<u64>,
}

impl FormController {
    /// Create a controller in the `Editing` state.
    #[must_use]
    pub fn new(ctx: EditorContext, config: EditorConfig) -> Self {
        Self {
            ctx,
            config,
            preview: Cell::new(PreviewState::Editing),
            next_seq: Cell::new(1),
            latest_toggle: Cell::new(0),
        }
    }

    pub fn preview_state(&self) -> PreviewState {
        self.preview.get()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Validate the definition on the server without saving it.
    ///
    /// The result is always shown in the banner.
    pub async fn request_validate(&self, event: &dyn UiEvent) -> EditorResult<ActionOutcome> {
        event.prevent_default();
        let request = match self.prepare(Action::Validate)? {
            Prepared::Ready(request) => request,
            Prepared::Blocked(outcome) => return Ok(outcome),
        };

        let outcome = self.submit(&request).await?;
        Ok(self.notify(outcome.success, outcome.payload))
    }

    /// Validate and save; on success the browser is sent to the returned location.
    pub async fn request_validate_and_save(
        &self,
        event: &dyn UiEvent,
    ) -> EditorResult<ActionOutcome> {
        event.prevent_default();
        let request = match self.prepare(Action::ValidateAndSave)? {
            Prepared::Ready(request) => request,
            Prepared::Blocked(outcome) => return Ok(outcome),
        };

        let outcome = self.submit(&request).await?;
        if !outcome.success {
            return Ok(self.notify(false, outcome.payload));
        }

        if outcome.payload.trim().is_empty() {
            warn!("[editor] #{} save succeeded without a location", request.seq);
            return Ok(self.notify(false, MISSING_LOCATION.to_string()));
        }

        self.ctx.navigator.replace(&outcome.payload)?;
        info!("[editor] #{} saved, navigating to {}", request.seq, outcome.payload);
        Ok(ActionOutcome::Navigated {
            location: outcome.payload,
        })
    }

    /// Swap the textarea for the server-rendered highlight, or back.
    ///
    /// Not gated on client-side validation.
    pub async fn request_toggle_highlight(
        &self,
        event: &dyn UiEvent,
    ) -> EditorResult<ActionOutcome> {
        event.prevent_default();
        let request = match self.prepare(Action::ToggleHighlight)? {
            Prepared::Ready(request) => request,
            Prepared::Blocked(outcome) => return Ok(outcome),
        };
        let seq = request.seq;

        let outcome = self.submit(&request).await?;

        if self.is_stale_toggle(seq) {
            return Ok(ActionOutcome::Discarded { seq });
        }

        if !outcome.success {
            return Ok(self.notify(false, outcome.payload));
        }

        let fade = self.config.fade_duration();
        let state = self.preview.get();
        match state {
            PreviewState::Editing => {
                // The fragment goes in only after the textarea is gone.
                self.ctx.page.fade_out_text(fade).await?;
                // A newer toggle may have been dispatched during the fade; it owns the page now.
                if self.is_stale_toggle(seq) {
                    return Ok(ActionOutcome::Discarded { seq });
                }
                self.ctx.page.append_preview(&outcome.payload)?;
                self.preview.set(state.toggled());
                info!("[editor] #{seq} preview shown");
                Ok(ActionOutcome::PreviewShown)
            }
            PreviewState::Previewing => {
                let removed = self.ctx.page.remove_preview()?;
                self.preview.set(state.toggled());
                self.ctx.page.fade_in_text(fade).await?;
                info!("[editor] #{seq} preview hidden ({removed} fragment(s) removed)");
                Ok(ActionOutcome::PreviewHidden)
            }
        }
    }

    /// Under `Discard`, whether toggle `seq` has been overtaken by a newer toggle.
    fn is_stale_toggle(&self, seq: u64) -> bool {
        let latest = self.latest_toggle.get();
        let stale = self.config.stale_responses == StaleResponsePolicy::Discard && seq < latest;
        if stale {
            debug!("[editor] #{seq} toggle response overtaken by #{latest}, dropped");
        }
        stale
    }

    /// Read the form, run the validation gate if the action needs it, and
    /// assign the next sequence number.
    fn prepare(&self, action: Action) -> EditorResult<Prepared> {
        let fields = self.ctx.page.form_state()?;

        if action.requires_validation() {
            if let Err(errors) = self.ctx.validator.validate(&fields) {
                warn!(
                    "[editor] {action} blocked by client-side validation: {}",
                    errors
                        .iter()
                        .map(|e| e.field.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                return Ok(Prepared::Blocked(ActionOutcome::Blocked { errors }));
            }
        }

        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        if action == Action::ToggleHighlight {
            self.latest_toggle.set(seq);
        }

        Ok(Prepared::Ready(ActionRequest::new(action, fields, seq)))
    }

    async fn submit(&self, request: &ActionRequest) -> EditorResult<ResponseOutcome> {
        let endpoint = match &self.config.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => self.ctx.page.form_action()?,
        };
        debug!("[editor] #{} {} -> {endpoint}", request.seq, request.action);

        let response = self
            .ctx
            .transport
            .submit(&endpoint, request, self.config.action_encoding)
            .await
            .inspect_err(|e| {
                error!("[editor] #{} {} failed: {e}", request.seq, request.action);
                if !request.suppress_error_banner {
                    self.ctx.notifier.notify(false, &e.to_string());
                }
            })?;

        debug!(
            "[editor] #{} {} <- {}: {}",
            request.seq,
            request.action,
            response.status_text,
            truncate_for_log(&response.response_text)
        );
        Ok(response.into_outcome(request.action))
    }

    fn notify(&self, success: bool, message: String) -> ActionOutcome {
        if success {
            info!("[editor] {}", truncate_for_log(&message));
        } else {
            warn!("[editor] server reported failure: {}", truncate_for_log(&message));
        }
        self.ctx.notifier.notify(success, &message);
        ActionOutcome::Notified { success, message }
    }
}

enum Prepared {
    Ready(ActionRequest),
    Blocked(ActionOutcome),
}
