//! Configuration file loading.

use crate::error::ConfigError;
use crate::types::{ConfigFile, DiagnosticsConfig};
use std::path::Path;

/// The file name looked up by [`load_config`].
pub const CONFIG_FILE_NAME: &str = "trailmark.toml";

/// Loads accumulator options from `<dir>/trailmark.toml`.
pub fn load_config(dir: &Path) -> Result<DiagnosticsConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses accumulator options from TOML text.
///
/// A missing `[diagnostics]` table yields [`DiagnosticsConfig::default`].
/// Unknown tables or keys are rejected.
pub fn load_config_from_str(content: &str) -> Result<DiagnosticsConfig, ConfigError> {
    let file: ConfigFile =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    Ok(file.diagnostics)
}
