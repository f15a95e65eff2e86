/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Value coercion for variation values.
 *
 * Coercion never fails. When a value cannot be converted it is left as it
 * came in, and the declared type in the generated table tells consumers what
 * to expect. Applying `coerce` twice gives the same result as applying it once.
 */

use crate::model::VariationType;
use serde_json::{Number, Value};

/// Coerce a raw variation value to the runtime type of `declared`.
pub fn coerce(value: Value, declared: VariationType) -> Value {
    if value.is_null() {
        return Value::Null;
    }

    match declared {
        VariationType::Boolean => to_boolean(value),
        VariationType::Number | VariationType::Numeric => to_number(value),
        VariationType::Json => to_json(value),
        VariationType::String | VariationType::Unknown => to_string(value),
    }
}

fn to_boolean(value: Value) -> Value {
    let truthy = match &value {
        Value::Bool(b) => *b,
        Value::String(s) => s.eq_ignore_ascii_case("true"),
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
        Value::Null => false,
    };
    Value::Bool(truthy)
}

fn to_number(value: Value) -> Value {
    match value {
        Value::String(s) => parse_number(&s).map_or(Value::String(s), Value::Number),
        other => other,
    }
}

/// Integers stay integers so `"42"` renders as `42`, not `42.0`.
fn parse_number(raw: &str) -> Option<Number> {
    let trimmed = raw.trim();
    if let Ok(i) = trimmed.parse::<i64>() {
        return Some(Number::from(i));
    }
    if let Ok(u) = trimmed.parse::<u64>() {
        return Some(Number::from(u));
    }
    // f64 parsing accepts "NaN" and "inf", which have no JSON form
    trimmed.parse::<f64>().ok().and_then(Number::from_f64)
}

fn to_json(value: Value) -> Value {
    match value {
        Value::String(s) => match serde_json::from_str::<Value>(&s) {
            // A string that decodes to another string is left alone
            Ok(Value::String(_)) | Err(_) => Value::String(s),
            Ok(parsed) => parsed,
        },
        other => other,
    }
}

fn to_string(value: Value) -> Value {
    match value {
        Value::String(_) => value,
        Value::Bool(b) => Value::String(b.to_string()),
        Value::Number(n) => Value::String(n.to_string()),
        other => Value::String(other.to_string()),
    }
}
