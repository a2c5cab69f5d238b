//! Config file loading

use std::path::Path;

use procdef_editor_core::{EditorConfig, EditorError, EditorResult};

/// Parse a TOML document into a validated [`EditorConfig`].
pub fn parse_config(toml_str: &str) -> EditorResult<EditorConfig> {
    let config: EditorConfig =
        toml::from_str(toml_str).map_err(|e| EditorError::Config(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Read and parse a TOML config file.
pub fn load_config(path: impl AsRef<Path>) -> EditorResult<EditorConfig> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .map_err(|e| EditorError::Config(format!("Failed to read {}: {e}", path.display())))?;
    let config = parse_config(&raw)?;
    log::info!("Loaded editor config from {}", path.display());
    Ok(config)
}
