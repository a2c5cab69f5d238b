//! Process Definition Editor Core Library
//!
//! Controller logic behind the process definition edit page:
//! - validate the definition on the server
//! - validate and save it, then follow the server's redirect
//! - toggle between the raw textarea and a server-rendered highlighted preview
//!
//! The page, the network transport, the banner and browser navigation are all
//! abstracted through traits so the same controller drives the browser
//! (`procdef-editor-web`) and headless hosts (`procdef-editor-app`).

pub mod config;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::{DomConfig, EditorConfig, StaleResponsePolicy};
pub use error::{EditorError, EditorResult};
pub use services::{EditorContext, FormController, RequiredFieldsValidator};
pub use traits::{EditorPage, FormValidator, Navigator, NoopEvent, Notifier, Transport, UiEvent};
pub use types::{
    Action, ActionEncoding, ActionOutcome, ActionRequest, FieldError, FormField, FormState,
    PreviewState, ResponseOutcome, TransportResponse,
};
