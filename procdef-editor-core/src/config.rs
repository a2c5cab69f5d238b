//! Editor configuration
//!
//! Every field has a default matching the stock admin page, so an empty
//! document deserializes to a working configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{EditorError, EditorResult};
use crate::types::ActionEncoding;

/// What to do with a toggle response that was overtaken by a newer toggle click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaleResponsePolicy {
    /// Apply every response in arrival order; the last one to arrive wins.
    #[default]
    Apply,
    /// Drop toggle responses older than the most recently dispatched toggle.
    Discard,
}

/// Element ids and selectors of the editor page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DomConfig {
    pub form_id: String,
    pub text_field_id: String,
    pub preview_container_id: String,
    /// CSS selector matching the inserted preview markup.
    pub preview_selector: String,
    pub toggle_highlight_button_id: String,
    pub validate_button_id: String,
    pub validate_save_button_id: String,
    pub banner_id: String,
}

impl Default for DomConfig {
    fn default() -> Self {
        Self {
            form_id: "process-definition".to_string(),
            text_field_id: "id_text".to_string(),
            preview_container_id: "text_cell".to_string(),
            preview_selector: ".highlighttable".to_string(),
            toggle_highlight_button_id: "toggle_highlight".to_string(),
            validate_button_id: "validate".to_string(),
            validate_save_button_id: "validate_save".to_string(),
            banner_id: "user-message".to_string(),
        }
    }
}

/// Editor configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Overrides the form's `action` attribute as the submission endpoint.
    pub endpoint: Option<String>,
    /// Base URL that relative endpoints are resolved against (HTTP transport only).
    pub base_url: Option<String>,
    /// Duration of the textarea fade in both directions.
    pub fade_duration_ms: u64,
    pub action_encoding: ActionEncoding,
    pub stale_responses: StaleResponsePolicy,
    /// Fields that must be non-blank before validate / validate-and-save is sent.
    pub required_fields: Vec<String>,
    pub request_timeout_secs: u64,
    pub dom: DomConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            base_url: None,
            fade_duration_ms: 70,
            action_encoding: ActionEncoding::default(),
            stale_responses: StaleResponsePolicy::default(),
            required_fields: vec!["name".to_string(), "text".to_string()],
            request_timeout_secs: 30,
            dom: DomConfig::default(),
        }
    }
}

impl EditorConfig {
    pub fn fade_duration(&self) -> Duration {
        Duration::from_millis(self.fade_duration_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Parse from JSON (the form `mount()` receives it in).
    pub fn from_json(json: &str) -> EditorResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the controller cannot work with.
    pub fn validate(&self) -> EditorResult<()> {
        if self.dom.form_id.trim().is_empty() {
            return Err(EditorError::Config("dom.form_id cannot be empty".to_string()));
        }
        if self.dom.text_field_id.trim().is_empty() {
            return Err(EditorError::Config(
                "dom.text_field_id cannot be empty".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(EditorError::Config(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        if let Some(blank) = self.required_fields.iter().position(|f| f.trim().is_empty()) {
            return Err(EditorError::Config(format!(
                "required_fields[{blank}] is blank"
            )));
        }
        if matches!(self.endpoint.as_deref(), Some(e) if e.trim().is_empty()) {
            return Err(EditorError::Config(
                "endpoint cannot be empty when set".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let config = EditorConfig::from_json("{}").unwrap();
        assert_eq!(config, EditorConfig::default());
        assert_eq!(config.fade_duration(), Duration::from_millis(70));
        assert_eq!(config.dom.preview_selector, ".highlighttable");
    }

    #[test]
    fn partial_json_overrides_only_given_fields() {
        let config = EditorConfig::from_json(
            r#"{"fade_duration_ms":100,"action_encoding":"legacy_flag","dom":{"form_id":"pd"}}"#,
        )
        .unwrap();
        assert_eq!(config.fade_duration_ms, 100);
        assert_eq!(config.action_encoding, ActionEncoding::LegacyFlag);
        assert_eq!(config.dom.form_id, "pd");
        assert_eq!(config.dom.text_field_id, "id_text");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = EditorConfig::from_json(r#"{"fade_ms":100}"#).unwrap_err();
        assert!(matches!(err, EditorError::Serialization(_)));
    }

    #[test]
    fn zero_timeout_is_invalid() {
        let config = EditorConfig {
            request_timeout_secs: 0,
            ..EditorConfig::default()
        };
        assert!(matches!(config.validate(), Err(EditorError::Config(_))));
    }

    #[test]
    fn blank_required_field_is_invalid() {
        let config = EditorConfig {
            required_fields: vec!["name".into(), "  ".into()],
            ..EditorConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err,
            EditorError::Config("required_fields[1] is blank".to_string())
        );
    }

    #[test]
    fn empty_endpoint_override_is_invalid() {
        let config = EditorConfig {
            endpoint: Some(String::new()),
            ..EditorConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
