//! Type definitions module

mod action;
mod form;
mod preview;
mod response;

pub use action::{Action, ActionEncoding, ActionRequest};
pub use form::{FieldError, FormField, FormState};
pub use preview::PreviewState;
pub use response::{ActionOutcome, ResponseOutcome, TransportResponse, STATUS_OK};
