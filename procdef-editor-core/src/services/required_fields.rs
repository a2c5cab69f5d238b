//! Field-presence validator

use crate::traits::FormValidator;
use crate::types::{FieldError, FormState};

const REQUIRED_MESSAGE: &str = "This field is required";

/// Rejects the form when any configured field is missing or blank.
#[derive(Debug, Clone)]
pub struct RequiredFieldsValidator {
    required: Vec<String>,
}

impl RequiredFieldsValidator {
    pub fn new<I, S>(required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required: required.into_iter().map(Into::into).collect(),
        }
    }
}

impl FormValidator for RequiredFieldsValidator {
    fn validate(&self, form: &FormState) -> Result<(), Vec<FieldError>> {
        let errors: Vec<FieldError> = self
            .required
            .iter()
            .filter(|name| form.get(name).is_none_or(|v| v.trim().is_empty()))
            .map(|name| FieldError::new(name.as_str(), REQUIRED_MESSAGE))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
