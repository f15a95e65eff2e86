//! Config acquisition
//!
//! Flag configuration comes either from a local file or from the provider's
//! HTTP API. Both hand back the parsed document plus a label naming where it
//! came from; the label ends up in the generated file's header.

pub mod api;
pub mod file;

use crate::error::CliResult;
use serde_json::Value;
use std::path::PathBuf;

pub use api::ApiSource;

/// Where to read flag configuration from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Api(ApiSource),
}

/// A parsed configuration document and its origin
#[derive(Debug, Clone)]
pub struct FetchedConfig {
    pub raw: Value,
    pub label: String,
}

impl ConfigSource {
    /// Human-readable origin used in messages and the generated header
    pub fn label(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Api(api) => api.url.clone(),
        }
    }
}

/// Read or download the configuration document.
///
/// The API request is the only asynchronous step of a run; it is driven to
/// completion here before anything else happens.
pub fn fetch(source: &ConfigSource) -> CliResult<FetchedConfig> {
    let raw = match source {
        ConfigSource::File(path) => file::read_config_file(path)?,
        ConfigSource::Api(api) => api::fetch_flags_blocking(api)?,
    };

    Ok(FetchedConfig {
        raw,
        label: source.label(),
    })
}
