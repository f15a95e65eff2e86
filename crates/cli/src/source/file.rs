//! File-backed config source

use crate::error::{CliError, CliResult};
use flagtable_compiler::{parse_config, CompilerError};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read and parse a JSON or YAML flag configuration file.
///
/// A missing or unreadable file is `SourceUnavailable`; content that does not
/// parse is a `Parse` error naming the file.
pub fn read_config_file(path: &Path) -> CliResult<Value> {
    if !path.exists() {
        return Err(CliError::SourceUnavailable(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path).map_err(|e| {
        CliError::SourceUnavailable(format!(
            "Failed to read config file {}: {e}",
            path.display()
        ))
    })?;

    tracing::info!(path = %path.display(), bytes = content.len(), "read config file");

    let path_str = path.to_string_lossy();
    parse_config(&content, Some(&path_str)).map_err(|e| match e {
        CompilerError::Parse(error) => CliError::Parse {
            origin: path.display().to_string(),
            error,
        },
        other => CliError::Compiler(other),
    })
}
