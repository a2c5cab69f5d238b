//! Collaborator traits the controller depends on
//!
//! Everything here runs on the page's UI thread, so the async traits are
//! declared `?Send` and implementations are shared through `Rc`.

mod notifier;
mod page;
mod transport;
mod validator;

pub use notifier::{Navigator, Notifier};
pub use page::{EditorPage, NoopEvent, UiEvent};
pub use transport::Transport;
pub use validator::FormValidator;
