//! Form state and field-level validation errors

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single named form control and its current value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

/// The ordered name/value pairs currently present in the edit form.
///
/// Order is document order and duplicate names are kept, the same as a
/// browser form serializer would see them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormState {
    fields: Vec<FormField>,
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, keeping any earlier field with the same name.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push(FormField {
            name: name.into(),
            value: value.into(),
        });
    }

    /// Builder-style [`push`](Self::push).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    /// First value for `name`, if the field is present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// Replace the value of every field called `name`, or append it if absent.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        let mut found = false;
        for field in self.fields.iter_mut().filter(|f| f.name == name) {
            field.value.clone_from(&value);
            found = true;
        }
        if !found {
            self.push(name, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormField> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// URL-encode the fields the way a browser form serializer does.
    ///
    /// Line breaks are normalized to CRLF, spaces become `+`, pairs are
    /// joined with `&`.
    pub fn to_urlencoded(&self) -> String {
        self.fields
            .iter()
            .map(|f| encode_pair(&f.name, &f.value))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<N, V> FromIterator<(N, V)> for FormState
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut state = Self::new();
        for (name, value) in iter {
            state.push(name, value);
        }
        state
    }
}

/// Encode one `name=value` pair.
pub(crate) fn encode_pair(name: &str, value: &str) -> String {
    format!("{}={}", encode_component(name), encode_component(value))
}

fn encode_component(raw: &str) -> String {
    urlencoding::encode(&normalize_newlines(raw)).replace("%20", "+")
}

/// Rewrite lone `\n` and `\r` into `\r\n`.
fn normalize_newlines(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str("\r\n");
            }
            '\n' => out.push_str("\r\n"),
            other => out.push(other),
        }
    }
    out
}

/// A field that failed client-side validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
