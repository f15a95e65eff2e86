/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */
use crate::error::ShapeError;
use jsonschema::JSONSchema;
use serde_json::Value;

/// Embed the flag list schema at compile time
const FLAG_LIST_SCHEMA_JSON: &str = include_str!("../../../schemas/flag-list.schema.v1.json");

/// Load the schema for array-shaped (API) flag lists.
///
/// # Errors
///
/// Returns `ShapeError::Schema` if the embedded schema is not valid JSON.
pub fn load_flag_list_schema() -> Result<Value, ShapeError> {
    serde_json::from_str(FLAG_LIST_SCHEMA_JSON)
        .map_err(|e| ShapeError::Schema(format!("embedded flag list schema is invalid: {e}")))
}

/// Validate an array-shaped flag list against the embedded schema.
///
/// All schema violations are reported together, one per line, prefixed with
/// the JSON pointer of the offending record.
///
/// # Errors
///
/// Returns `ShapeError::InvalidRecord` listing every violation.
pub fn validate_flag_list(data: &Value) -> Result<(), ShapeError> {
    let schema = load_flag_list_schema()?;
    let compiled = JSONSchema::compile(&schema)
        .map_err(|e| ShapeError::Schema(format!("Failed to compile schema: {e}")))?;

    if let Err(errors) = compiled.validate(data) {
        let error_messages: Vec<String> = errors
            .map(|e| format!("{}: {}", e.instance_path, e))
            .collect();
        return Err(ShapeError::InvalidRecord(error_messages.join("\n")));
    }

    Ok(())
}
