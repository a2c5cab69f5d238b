//! Platform-agnostic bootstrap for the process definition editor.
//!
//! Provides `EditorApp` (configured controller), `EditorAppBuilder` (adapter
//! injection) and config file loading. Browser and headless hosts both go
//! through the builder.

pub mod adapters;
mod config;

use std::rc::Rc;

pub use config::{load_config, parse_config};

use procdef_editor_core::{
    EditorConfig, EditorContext, EditorError, EditorPage, EditorResult, FormController,
    FormValidator, Navigator, Notifier, RequiredFieldsValidator, Transport,
};
use procdef_editor_http::HttpTransport;

use crate::adapters::LogNotifier;

/// A ready-to-use editor: the controller plus the configuration it was built from.
pub struct EditorApp {
    pub config: EditorConfig,
    pub controller: Rc<FormController>,
}

/// Builder for constructing `EditorApp` with host-specific adapters.
///
/// # Required adapters
/// - `page`: the editor page (DOM or in-memory)
/// - `navigator`: browser navigation
///
/// # Optional
/// - `transport`: defaults to `HttpTransport` built from the config
/// - `notifier`: defaults to `LogNotifier`
/// - `validator`: defaults to `RequiredFieldsValidator` over `config.required_fields`
pub struct EditorAppBuilder {
    config: EditorConfig,
    transport: Option<Rc<dyn Transport>>,
    page: Option<Rc<dyn EditorPage>>,
    notifier: Option<Rc<dyn Notifier>>,
    navigator: Option<Rc<dyn Navigator>>,
    validator: Option<Rc<dyn FormValidator>>,
}

impl EditorAppBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: EditorConfig::default(),
            transport: None,
            page: None,
            notifier: None,
            navigator: None,
            validator: None,
        }
    }

    #[must_use]
    pub fn config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn transport(mut self, transport: Rc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    #[must_use]
    pub fn page(mut self, page: Rc<dyn EditorPage>) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub fn notifier(mut self, notifier: Rc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    #[must_use]
    pub fn navigator(mut self, navigator: Rc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    #[must_use]
    pub fn validator(mut self, validator: Rc<dyn FormValidator>) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Build the `EditorApp`.
    ///
    /// # Errors
    /// Returns `EditorError::Config` if the config is invalid or a required
    /// adapter is missing.
    pub fn build(self) -> EditorResult<EditorApp> {
        self.config.validate()?;

        let page = self
            .page
            .ok_or_else(|| EditorError::Config("page is required".to_string()))?;
        let navigator = self
            .navigator
            .ok_or_else(|| EditorError::Config("navigator is required".to_string()))?;
        let transport: Rc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Rc::new(HttpTransport::new(&self.config)?),
        };
        let notifier = self.notifier.unwrap_or_else(|| Rc::new(LogNotifier));
        let validator = self.validator.unwrap_or_else(|| {
            Rc::new(RequiredFieldsValidator::new(
                self.config.required_fields.clone(),
            ))
        });

        let ctx = EditorContext::new(transport, page, notifier, navigator, validator);
        log::debug!(
            "Editor ready (fade {}ms, encoding {:?}, stale responses {:?})",
            self.config.fade_duration_ms,
            self.config.action_encoding,
            self.config.stale_responses
        );

        Ok(EditorApp {
            controller: Rc::new(FormController::new(ctx, self.config.clone())),
            config: self.config,
        })
    }
}

impl Default for EditorAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
