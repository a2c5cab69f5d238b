//! In-memory page, banner and navigation
//!
//! Used by headless hosts (scripted checks, server-side rendering tests) and
//! by the integration tests.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use async_trait::async_trait;
use procdef_editor_core::{EditorPage, EditorResult, FormState, Navigator, Notifier};

/// Visible state of a [`MemoryPage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSnapshot {
    pub text_visible: bool,
    pub fragments: Vec<String>,
}

/// An editor page held entirely in memory.
///
/// Fades complete immediately.
pub struct MemoryPage {
    form: RefCell<FormState>,
    action: String,
    text_visible: Cell<bool>,
    fragments: RefCell<Vec<String>>,
}

impl MemoryPage {
    pub fn new(action: impl Into<String>, form: FormState) -> Self {
        Self {
            form: RefCell::new(form),
            action: action.into(),
            text_visible: Cell::new(true),
            fragments: RefCell::new(Vec::new()),
        }
    }

    /// Simulate the user typing into a field.
    pub fn set_field(&self, name: &str, value: &str) {
        self.form.borrow_mut().set(name, value);
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            text_visible: self.text_visible.get(),
            fragments: self.fragments.borrow().clone(),
        }
    }
}

#[async_trait(?Send)]
impl EditorPage for MemoryPage {
    fn form_state(&self) -> EditorResult<FormState> {
        Ok(self.form.borrow().clone())
    }

    fn form_action(&self) -> EditorResult<String> {
        Ok(self.action.clone())
    }

    async fn fade_out_text(&self, _duration: Duration) -> EditorResult<()> {
        self.text_visible.set(false);
        Ok(())
    }

    async fn fade_in_text(&self, _duration: Duration) -> EditorResult<()> {
        self.text_visible.set(true);
        Ok(())
    }

    fn append_preview(&self, html: &str) -> EditorResult<()> {
        self.fragments.borrow_mut().push(html.to_string());
        Ok(())
    }

    fn remove_preview(&self) -> EditorResult<usize> {
        Ok(self.fragments.borrow_mut().drain(..).count())
    }
}

/// Writes banners to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, success: bool, message: &str) {
        if success {
            log::info!("{message}");
        } else {
            log::warn!("{message}");
        }
    }
}

/// Keeps every banner shown, oldest first.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    banners: RefCell<Vec<(bool, String)>>,
}

impl RecordingNotifier {
    pub fn banners(&self) -> Vec<(bool, String)> {
        self.banners.borrow().clone()
    }

    /// The banner currently on screen.
    pub fn last(&self) -> Option<(bool, String)> {
        self.banners.borrow().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, success: bool, message: &str) {
        self.banners
            .borrow_mut()
            .push((success, message.to_string()));
    }
}

/// Records the location history; `replace` overwrites the current entry.
#[derive(Debug)]
pub struct MemoryNavigator {
    history: RefCell<Vec<String>>,
    replacements: Cell<usize>,
}

impl MemoryNavigator {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            history: RefCell::new(vec![start.into()]),
            replacements: Cell::new(0),
        }
    }

    pub fn current(&self) -> Option<String> {
        self.history.borrow().last().cloned()
    }

    pub fn history_len(&self) -> usize {
        self.history.borrow().len()
    }

    pub fn replacements(&self) -> usize {
        self.replacements.get()
    }
}

impl Navigator for MemoryNavigator {
    fn replace(&self, location: &str) -> EditorResult<()> {
        let mut history = self.history.borrow_mut();
        match history.last_mut() {
            Some(current) => *current = location.to_string(),
            None => history.push(location.to_string()),
        }
        self.replacements.set(self.replacements.get() + 1);
        Ok(())
    }
}
