//! Provider API config source
//!
//! Issues a single authenticated GET against the flag provider and parses the
//! body, which is expected to be the array-shaped flag list.

use crate::error::{CliError, CliResult};
use flagtable_compiler::parser::parse_api_body;
use reqwest::Client;
use serde_json::Value;
use std::fmt;

/// Flag list endpoint of the provider API
pub const DEFAULT_API_URL: &str = "https://eppo.cloud/api/v1/feature-flags";

/// Environment variable holding the API key when `--api-key` is not given
pub const API_KEY_ENV: &str = "EPPO_API_KEY";

/// Header carrying the API key
pub const TOKEN_HEADER: &str = "X-Eppo-Token";

/// Remote API endpoint and credential
#[derive(Clone, PartialEq, Eq)]
pub struct ApiSource {
    pub url: String,
    pub api_key: String,
}

impl fmt::Debug for ApiSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiSource")
            .field("url", &self.url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

pub fn user_agent() -> String {
    format!("flagtable/{}", env!("FLAGTABLE_VERSION"))
}

/// Pick the API key: explicit value first, then the environment.
///
/// Empty values count as missing.
pub fn resolve_api_key(explicit: Option<&str>) -> CliResult<String> {
    explicit
        .map(str::to_string)
        .or_else(|| std::env::var(API_KEY_ENV).ok())
        .filter(|key| !key.trim().is_empty())
        .ok_or(CliError::MissingCredential(API_KEY_ENV))
}

/// Build the HTTP client used for provider requests
pub fn build_client() -> CliResult<Client> {
    Client::builder()
        .user_agent(user_agent())
        .build()
        .map_err(|e| CliError::SourceUnavailable(format!("Failed to create HTTP client: {e}")))
}

/// Fetch and parse the flag list.
///
/// Transport failures and non-2xx responses are `SourceUnavailable`; a body
/// that is not JSON is a `Parse` error.
pub async fn fetch_flags(client: &Client, source: &ApiSource) -> CliResult<Value> {
    tracing::info!(url = %source.url, "fetching flag configuration");

    let response = client
        .get(&source.url)
        .header(TOKEN_HEADER, &source.api_key)
        .send()
        .await
        .map_err(|e| {
            CliError::SourceUnavailable(format!("Request to {} failed: {e}", source.url))
        })?;

    let status = response.status();
    if !status.is_success() {
        tracing::debug!(%status, "provider rejected request");
        return Err(CliError::SourceUnavailable(format!(
            "{} responded with HTTP {status}",
            source.url
        )));
    }

    let body = response.text().await.map_err(|e| {
        CliError::SourceUnavailable(format!(
            "Failed to read response from {}: {e}",
            source.url
        ))
    })?;
    tracing::debug!(bytes = body.len(), "received flag configuration");

    parse_api_body(&body).map_err(|error| CliError::Parse {
        origin: format!("response from {}", source.url),
        error,
    })
}

/// Run [`fetch_flags`] to completion on a current-thread runtime.
pub fn fetch_flags_blocking(source: &ApiSource) -> CliResult<Value> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let client = build_client()?;
    runtime.block_on(fetch_flags(&client, source))
}
