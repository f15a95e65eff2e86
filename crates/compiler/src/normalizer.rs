/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Shape dispatch and normalization of provider configuration.
 *
 * Providers hand out two shapes: the API returns an ordered array of flag
 * records, while exported config files hold an object whose `flags` mapping is
 * keyed by flag name. Both are resolved once into `RawConfig` and then
 * flattened into the same `RawFlag` list.
 */

use crate::error::ShapeError;
use crate::model::{RawFlag, RawVariation};
use crate::schemas::validate_flag_list;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// Type name used when a flag does not declare one.
pub const UNKNOWN_TYPE: &str = "UNKNOWN";

/// One record of the API-shaped flag list.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiFlag {
    pub key: String,
    #[serde(default)]
    pub variation_type: Option<String>,
    #[serde(default, rename = "variationType")]
    pub variation_type_camel: Option<String>,
    #[serde(default)]
    pub variations: Option<Vec<ApiVariation>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiVariation {
    #[serde(default)]
    pub variant_key: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub value: Value,
}

/// One entry of a config file's `flags` mapping.
#[derive(Debug, Clone, Deserialize)]
pub struct FileFlag {
    #[serde(default, rename = "variationType", alias = "variation_type")]
    pub variation_type: Option<String>,
    #[serde(default)]
    pub variations: Option<IndexMap<String, FileVariation>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileVariation {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub value: Value,
}

/// Raw provider configuration with its shape already resolved.
#[derive(Debug, Clone)]
pub enum RawConfig {
    /// Ordered array of flag records (API shape).
    FlagList(Vec<ApiFlag>),
    /// Flags keyed by name (config file shape), in document order.
    FlagFile(IndexMap<String, FileFlag>),
}

impl RawConfig {
    /// Resolve the shape of a parsed document.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::UnrecognizedShape` when the document is neither an
    /// array nor an object with a `flags` mapping, and
    /// `ShapeError::InvalidRecord` when records do not have the expected fields.
    pub fn from_value(value: Value) -> Result<Self, ShapeError> {
        match value {
            Value::Array(_) => {
                validate_flag_list(&value)?;
                let flags: Vec<ApiFlag> = serde_json::from_value(value)
                    .map_err(|e| ShapeError::InvalidRecord(e.to_string()))?;
                Ok(Self::FlagList(flags))
            }
            Value::Object(mut object) => match object.remove("flags") {
                Some(flags @ Value::Object(_)) => {
                    let flags: IndexMap<String, FileFlag> = serde_json::from_value(flags)
                        .map_err(|e| ShapeError::InvalidRecord(e.to_string()))?;
                    Ok(Self::FlagFile(flags))
                }
                Some(other) => Err(ShapeError::UnrecognizedShape(format!(
                    "\"flags\" as {}",
                    describe(&other)
                ))),
                None => Err(ShapeError::UnrecognizedShape(
                    "an object without a \"flags\" mapping".to_string(),
                )),
            },
            other => Err(ShapeError::UnrecognizedShape(describe(&other))),
        }
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
    .to_string()
}

/// Flatten either configuration shape into the uniform flag list.
///
/// Missing or empty variation collections become empty lists.
///
/// # Errors
///
/// Returns `ShapeError::Empty` if the configuration holds no flags.
pub fn normalize(config: RawConfig) -> Result<Vec<RawFlag>, ShapeError> {
    let flags: Vec<RawFlag> = match config {
        RawConfig::FlagList(records) => records.into_iter().map(from_api_flag).collect(),
        RawConfig::FlagFile(entries) => entries
            .into_iter()
            .map(|(name, flag)| from_file_flag(name, flag))
            .collect(),
    };

    if flags.is_empty() {
        return Err(ShapeError::Empty);
    }

    for flag in flags.iter().filter(|f| f.variations.is_empty()) {
        tracing::debug!(flag = %flag.key, "flag has no variations");
    }

    Ok(flags)
}

fn from_api_flag(flag: ApiFlag) -> RawFlag {
    let variations = flag
        .variations
        .unwrap_or_default()
        .into_iter()
        .map(|v| RawVariation {
            variant_key: v.variant_key.or(v.key).unwrap_or_default(),
            value: v.value,
        })
        .collect();

    RawFlag {
        key: flag.key,
        variation_type: flag
            .variation_type
            .or(flag.variation_type_camel)
            .unwrap_or_else(|| UNKNOWN_TYPE.to_string()),
        variations,
    }
}

fn from_file_flag(name: String, flag: FileFlag) -> RawFlag {
    let variations = flag
        .variations
        .unwrap_or_default()
        .into_iter()
        .map(|(variant_name, v)| RawVariation {
            variant_key: v.key.unwrap_or(variant_name),
            value: v.value,
        })
        .collect();

    RawFlag {
        key: name,
        variation_type: flag
            .variation_type
            .unwrap_or_else(|| UNKNOWN_TYPE.to_string()),
        variations,
    }
}
