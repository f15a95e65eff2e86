/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Parser module for reading provider configuration from YAML/JSON strings.
 * This module works only with in-memory data (no file I/O).
 */

pub mod error;
pub mod utils;

pub use error::ParseError;

use serde_json::Value;

/// Parse provider configuration from a string.
///
/// The result is the raw document; its shape is checked later by
/// [`crate::normalizer::RawConfig::from_value`].
///
/// # Arguments
///
/// * `content` - The JSON or YAML content as a string
/// * `file_path` - Optional file path (for format detection)
///
/// # Errors
///
/// Returns `ParseError` if the content is neither valid JSON nor valid YAML.
pub fn parse_config(content: &str, file_path: Option<&str>) -> Result<Value, ParseError> {
    utils::parse_yaml_or_json(content, file_path)
}

/// Parse a provider API response body.
///
/// API bodies are always JSON, so no YAML fallback is attempted.
///
/// # Errors
///
/// Returns `ParseError::InvalidJson` if the body is not valid JSON.
pub fn parse_api_body(body: &str) -> Result<Value, ParseError> {
    utils::parse_json(body).map_err(ParseError::InvalidJson)
}
