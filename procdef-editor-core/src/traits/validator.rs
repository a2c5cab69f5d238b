//! Client-side form validation abstract Trait

use crate::types::{FieldError, FormState};

/// Field-presence validation run before `validate` and `validate_and_save`.
pub trait FormValidator {
    /// `Ok(())` when the form may be submitted, otherwise one error per offending field.
    fn validate(&self, form: &FormState) -> Result<(), Vec<FieldError>>;
}
