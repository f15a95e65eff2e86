/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Flag data model shared by the normalizer, canonicalizer, coercer and
 * the code generators.
 */

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Declared value type of a flag's variations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VariationType {
    String,
    Boolean,
    Number,
    Numeric,
    Json,
    Unknown,
}

impl VariationType {
    /// Parse a provider type name, ignoring case.
    ///
    /// Anything unrecognized is `Unknown`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "STRING" => Self::String,
            "BOOLEAN" => Self::Boolean,
            "NUMBER" => Self::Number,
            "NUMERIC" => Self::Numeric,
            "JSON" => Self::Json,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "STRING",
            Self::Boolean => "BOOLEAN",
            Self::Number => "NUMBER",
            Self::Numeric => "NUMERIC",
            Self::Json => "JSON",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for VariationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A variation as it appears in the source, before coercion.
#[derive(Debug, Clone, PartialEq)]
pub struct RawVariation {
    pub variant_key: String,
    pub value: Value,
}

/// A flag in the uniform shape produced by the normalizer.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFlag {
    pub key: String,
    /// Type name exactly as the source spelled it (`"UNKNOWN"` when absent).
    pub variation_type: String,
    pub variations: Vec<RawVariation>,
}

/// A variation whose value has been coerced to the flag's declared type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variation {
    pub variant_key: String,
    pub value: Value,
}

/// A flag ready for code generation.
///
/// `symbolic_name` is unique within one compiled set; `source_key` is the
/// provider's key, untouched. Variation order is the source order, so
/// `variations[0]` is the control variation by convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalFlag {
    pub source_key: String,
    pub symbolic_name: String,
    pub declared_type: VariationType,
    pub variations: Vec<Variation>,
}
