//! Which form controls contribute to the submitted form, and with what value.
//!
//! Follows the browser's own form serialization: unnamed and disabled
//! controls are skipped, buttons and file inputs never contribute, and
//! checkboxes/radios only count when checked.

/// Value an unchecked-value checkbox or radio submits.
pub const DEFAULT_CHECKED_VALUE: &str = "on";

/// Input types that are never part of a serialized form.
const SKIPPED_INPUT_TYPES: &[&str] = &["submit", "button", "reset", "image", "file"];

/// The submitted value of an `<input>`, or `None` if it does not contribute.
pub fn input_value(input_type: &str, value: &str, checked: bool) -> Option<String> {
    let input_type = input_type.to_ascii_lowercase();
    if SKIPPED_INPUT_TYPES.contains(&input_type.as_str()) {
        return None;
    }
    match input_type.as_str() {
        "checkbox" | "radio" if !checked => None,
        "checkbox" | "radio" if value.is_empty() => Some(DEFAULT_CHECKED_VALUE.to_string()),
        _ => Some(value.to_string()),
    }
}

/// Whether a control with this `name` and `disabled` flag is serialized at all.
pub fn is_successful(name: &str, disabled: bool) -> bool {
    !name.is_empty() && !disabled
}

/// Class applied to the banner element.
pub fn banner_class(success: bool) -> &'static str {
    if success {
        "user-message user-message-success"
    } else {
        "user-message user-message-failure"
    }
}
