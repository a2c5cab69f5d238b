//! Controller layer

mod form_controller;
mod required_fields;

pub use form_controller::FormController;
pub use required_fields::RequiredFieldsValidator;

use std::rc::Rc;

use crate::traits::{EditorPage, FormValidator, Navigator, Notifier, Transport};

/// Editor context - holds every collaborator of the controller.
///
/// The host creates it and injects its own page, transport and banner
/// implementations.
pub struct EditorContext {
    pub transport: Rc<dyn Transport>,
    pub page: Rc<dyn EditorPage>,
    pub notifier: Rc<dyn Notifier>,
    pub navigator: Rc<dyn Navigator>,
    pub validator: Rc<dyn FormValidator>,
}

impl EditorContext {
    #[must_use]
    pub fn new(
        transport: Rc<dyn Transport>,
        page: Rc<dyn EditorPage>,
        notifier: Rc<dyn Notifier>,
        navigator: Rc<dyn Navigator>,
        validator: Rc<dyn FormValidator>,
    ) -> Self {
        Self {
            transport,
            page,
            notifier,
            navigator,
            validator,
        }
    }
}
