//! Test helpers
//!
//! Mock collaborators and a factory that wires them into a controller.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::config::EditorConfig;
use crate::error::{EditorError, EditorResult};
use crate::services::{EditorContext, FormController, RequiredFieldsValidator};
use crate::traits::{EditorPage, Navigator, Notifier, Transport, UiEvent};
use crate::types::{Action, ActionEncoding, ActionRequest, FormState, TransportResponse};

pub const FORM_ACTION: &str = "/zato/process/definition/create/1/";

// ===== MockTransport =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedCall {
    pub endpoint: String,
    pub action: Action,
    pub seq: u64,
    pub body: String,
}

pub struct MockTransport {
    responses: RefCell<VecDeque<EditorResult<TransportResponse>>>,
    gates: RefCell<HashMap<u64, oneshot::Receiver<TransportResponse>>>,
    calls: RefCell<Vec<SubmittedCall>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            responses: RefCell::new(VecDeque::new()),
            gates: RefCell::new(HashMap::new()),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Queue a response for the next ungated submission.
    pub fn respond(&self, response: EditorResult<TransportResponse>) {
        self.responses.borrow_mut().push_back(response);
    }

    /// Hold the response to submission `seq` until the returned sender fires.
    pub fn gate(&self, seq: u64) -> oneshot::Sender<TransportResponse> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().insert(seq, rx);
        tx
    }

    pub fn calls(&self) -> Vec<SubmittedCall> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn submit(
        &self,
        endpoint: &str,
        request: &ActionRequest,
        encoding: ActionEncoding,
    ) -> EditorResult<TransportResponse> {
        self.calls.borrow_mut().push(SubmittedCall {
            endpoint: endpoint.to_string(),
            action: request.action,
            seq: request.seq,
            body: request.encode(encoding),
        });

        let gate = self.gates.borrow_mut().remove(&request.seq);
        if let Some(rx) = gate {
            return rx
                .await
                .map_err(|_| EditorError::Transport("gate dropped".to_string()));
        }

        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(EditorError::Transport("no scripted response".to_string())))
    }
}

// ===== MockPage =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    FadeOut(Duration),
    FadeIn(Duration),
    Append(String),
    Remove(usize),
}

pub struct MockPage {
    form: RefCell<FormState>,
    text_visible: Cell<bool>,
    fragments: RefCell<Vec<String>>,
    events: RefCell<Vec<PageEvent>>,
    fade_out_gate: RefCell<Option<oneshot::Receiver<()>>>,
    fail_remove: Cell<bool>,
}

impl MockPage {
    pub fn new(form: FormState) -> Self {
        Self {
            form: RefCell::new(form),
            text_visible: Cell::new(true),
            fragments: RefCell::new(Vec::new()),
            events: RefCell::new(Vec::new()),
            fade_out_gate: RefCell::new(None),
            fail_remove: Cell::new(false),
        }
    }

    /// Hold the next fade-out until the returned sender fires.
    pub fn hold_fade_out(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.fade_out_gate.borrow_mut() = Some(rx);
        tx
    }

    pub fn fail_remove(&self, fail: bool) {
        self.fail_remove.set(fail);
    }

    pub fn set_field(&self, name: &str, value: &str) {
        self.form.borrow_mut().set(name, value);
    }

    pub fn text_visible(&self) -> bool {
        self.text_visible.get()
    }

    pub fn fragments(&self) -> Vec<String> {
        self.fragments.borrow().clone()
    }

    pub fn events(&self) -> Vec<PageEvent> {
        self.events.borrow().clone()
    }
}

#[async_trait(?Send)]
impl EditorPage for MockPage {
    fn form_state(&self) -> EditorResult<FormState> {
        Ok(self.form.borrow().clone())
    }

    fn form_action(&self) -> EditorResult<String> {
        Ok(FORM_ACTION.to_string())
    }

    async fn fade_out_text(&self, duration: Duration) -> EditorResult<()> {
        self.events.borrow_mut().push(PageEvent::FadeOut(duration));
        let gate = self.fade_out_gate.borrow_mut().take();
        if let Some(rx) = gate {
            let _ = rx.await;
        }
        self.text_visible.set(false);
        Ok(())
    }

    async fn fade_in_text(&self, duration: Duration) -> EditorResult<()> {
        self.events.borrow_mut().push(PageEvent::FadeIn(duration));
        self.text_visible.set(true);
        Ok(())
    }

    fn append_preview(&self, html: &str) -> EditorResult<()> {
        self.events
            .borrow_mut()
            .push(PageEvent::Append(html.to_string()));
        self.fragments.borrow_mut().push(html.to_string());
        Ok(())
    }

    fn remove_preview(&self) -> EditorResult<usize> {
        if self.fail_remove.get() {
            return Err(EditorError::Page(".highlighttable is detached".to_string()));
        }
        let removed = self.fragments.borrow_mut().drain(..).count();
        self.events.borrow_mut().push(PageEvent::Remove(removed));
        Ok(removed)
    }
}

// ===== MockNotifier / MockNavigator / MockEvent =====

#[derive(Default)]
pub struct MockNotifier {
    banners: RefCell<Vec<(bool, String)>>,
}

impl MockNotifier {
    pub fn banners(&self) -> Vec<(bool, String)> {
        self.banners.borrow().clone()
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, success: bool, message: &str) {
        self.banners
            .borrow_mut()
            .push((success, message.to_string()));
    }
}

#[derive(Default)]
pub struct MockNavigator {
    locations: RefCell<Vec<String>>,
}

impl MockNavigator {
    pub fn locations(&self) -> Vec<String> {
        self.locations.borrow().clone()
    }
}

impl Navigator for MockNavigator {
    fn replace(&self, location: &str) -> EditorResult<()> {
        self.locations.borrow_mut().push(location.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct MockEvent {
    prevented: Cell<bool>,
}

impl MockEvent {
    pub fn prevented(&self) -> bool {
        self.prevented.get()
    }
}

impl UiEvent for MockEvent {
    fn prevent_default(&self) {
        self.prevented.set(true);
    }
}

// ===== Factory =====

pub fn valid_form() -> FormState {
    FormState::new()
        .with("name", "order-fulfilment")
        .with("is_active", "on")
        .with("lang_code", "en_uk")
        .with("text", "Config:\n  Start: my.service")
}

pub struct Harness {
    pub controller: Rc<FormController>,
    pub transport: Rc<MockTransport>,
    pub page: Rc<MockPage>,
    pub notifier: Rc<MockNotifier>,
    pub navigator: Rc<MockNavigator>,
}

pub fn harness(config: EditorConfig, form: FormState) -> Harness {
    let transport = Rc::new(MockTransport::new());
    let page = Rc::new(MockPage::new(form));
    let notifier = Rc::new(MockNotifier::default());
    let navigator = Rc::new(MockNavigator::default());
    let validator = Rc::new(RequiredFieldsValidator::new(config.required_fields.clone()));

    let ctx = EditorContext::new(
        transport.clone(),
        page.clone(),
        notifier.clone(),
        navigator.clone(),
        validator,
    );

    Harness {
        controller: Rc::new(FormController::new(ctx, config)),
        transport,
        page,
        notifier,
        navigator,
    }
}
