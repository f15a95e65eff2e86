//! Settings file reading utilities
//!
//! An optional `.flagtable.yaml` in the working directory supplies defaults
//! for options not given on the command line. The API key is never read from
//! this file.

use crate::error::{CliError, CliResult};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Settings file name, looked up in the current directory
pub const SETTINGS_FILE: &str = ".flagtable.yaml";

/// Output file used when neither the command line nor settings name one
pub const DEFAULT_OUTPUT: &str = "feature-flags.generated.ts";

/// Language used when neither the command line nor settings name one
pub const DEFAULT_LANGUAGE: &str = "typescript";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Settings {
    /// Flag config file to read when `--api` is not given
    pub file: Option<String>,
    pub output: Option<String>,
    pub api_url: Option<String>,
    pub language: Option<String>,
}

/// Read `.flagtable.yaml` from the current directory
pub fn read_settings() -> CliResult<Settings> {
    read_settings_from(Path::new(SETTINGS_FILE))
}

/// Read a settings file; a missing or blank file yields the defaults
pub fn read_settings_from(path: &Path) -> CliResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(path).map_err(|e| CliError::Config {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    let settings: Settings = serde_yaml::from_str(&content).map_err(|e| CliError::Config {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    tracing::debug!(path = %path.display(), ?settings, "loaded settings");
    Ok(settings)
}
