/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Utility functions for parsing YAML and JSON content.
 * Works only with in-memory strings (no file I/O).
 */

use crate::parser::error::ParseError;
use serde_json::{Map, Number, Value};
use yaml_rust::{Yaml, YamlLoader};

/// Parse YAML or JSON content from a string.
///
/// Detects the format from the file extension when one is given, otherwise
/// tries JSON first (stricter), then YAML.
pub fn parse_yaml_or_json(content: &str, file_path: Option<&str>) -> Result<Value, ParseError> {
    if let Some(path) = file_path {
        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".json") {
            return parse_json(content).map_err(ParseError::InvalidJson);
        }
        if path_lower.ends_with(".yaml") || path_lower.ends_with(".yml") {
            return parse_yaml(content).map_err(ParseError::InvalidYaml);
        }
    }

    match parse_json(content) {
        Ok(value) => Ok(value),
        Err(_) => parse_yaml(content).map_err(ParseError::InvalidYaml),
    }
}

/// Parse JSON content from a string.
pub(crate) fn parse_json(content: &str) -> Result<Value, String> {
    serde_json::from_str(content).map_err(|e| format!("JSON parse error: {e}"))
}

/// Parse YAML content from a string.
///
/// Only the first document is used. Mapping order is kept.
fn parse_yaml(content: &str) -> Result<Value, String> {
    let docs = YamlLoader::load_from_str(content).map_err(|e| format!("YAML parse error: {e}"))?;

    let first = docs
        .first()
        .ok_or_else(|| "YAML document is empty".to_string())?;

    yaml_to_json_value(first).ok_or_else(|| "Failed to convert YAML to JSON value".to_string())
}

/// Convert a yaml-rust value into a `serde_json::Value`.
///
/// Reals that do not fit a finite JSON number are kept as their source text.
fn yaml_to_json_value(yaml: &Yaml) -> Option<Value> {
    match yaml {
        Yaml::Real(s) => Some(
            s.parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map_or_else(|| Value::String(s.clone()), Value::Number),
        ),
        Yaml::Integer(i) => Some(Value::Number(Number::from(*i))),
        Yaml::String(s) => Some(Value::String(s.clone())),
        Yaml::Boolean(b) => Some(Value::Bool(*b)),
        Yaml::Array(items) => Some(Value::Array(
            items.iter().filter_map(yaml_to_json_value).collect(),
        )),
        Yaml::Hash(hash) => {
            let mut map = Map::new();
            for (k, v) in hash {
                if let (Some(key), Some(value)) = (yaml_key(k), yaml_to_json_value(v)) {
                    map.insert(key, value);
                }
            }
            Some(Value::Object(map))
        }
        Yaml::Null => Some(Value::Null),
        // Aliases have no JSON equivalent
        Yaml::Alias(_) | Yaml::BadValue => None,
    }
}

/// Mapping keys must be scalars.
fn yaml_key(yaml: &Yaml) -> Option<String> {
    match yaml {
        Yaml::String(s) | Yaml::Real(s) => Some(s.clone()),
        Yaml::Integer(i) => Some(i.to_string()),
        Yaml::Boolean(b) => Some(b.to_string()),
        _ => None,
    }
}
