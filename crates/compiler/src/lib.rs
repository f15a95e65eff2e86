//! Flagtable Compiler Library
//!
//! Copyright 2025 Release Workshop Ltd
//! Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
//! See the LICENSE file in the project root for details.
//!
//! This library turns feature flag provider configuration into a list of
//! canonical flags ready for code generation. It works only with in-memory
//! data (no file or network I/O).
//!
//! # Example
//!
//! ```rust,no_run
//! use flagtable_compiler::{compile_flags, parse_config};
//!
//! let config = r#"
//! flags:
//!   dark-mode:
//!     variationType: BOOLEAN
//!     variations:
//!       on: { key: on, value: "true" }
//!       off: { key: off, value: "false" }
//! "#;
//!
//! let raw = parse_config(config, Some("flags.yaml"))?;
//! let flags = compile_flags(raw)?;
//! assert_eq!(flags[0].symbolic_name, "DARK_MODE");
//! # Ok::<(), flagtable_compiler::CompilerError>(())
//! ```

pub mod canonicalizer;
pub mod coercer;
pub mod error;
pub mod model;
pub mod normalizer;
pub mod parser;
pub mod schemas;

use canonicalizer::NameRegistry;
use model::{RawFlag, Variation};
use normalizer::{normalize, RawConfig, UNKNOWN_TYPE};
use serde_json::Value;

// Re-export the types most callers need
pub use error::{CompilerError, ParseError, ShapeError};
pub use model::{CanonicalFlag, VariationType};

/// Parse provider configuration from a YAML/JSON string.
///
/// # Errors
///
/// Returns `ParseError` if the input is neither valid JSON nor valid YAML.
pub fn parse_config(content: &str, file_path: Option<&str>) -> Result<Value, CompilerError> {
    Ok(parser::parse_config(content, file_path)?)
}

/// Compile a parsed configuration document into canonical flags.
///
/// Flags keep their input order. Symbolic names are unique within the
/// returned list.
///
/// # Errors
///
/// Returns `ShapeError` if the document has no recognizable flag shape or
/// holds no flags.
pub fn compile_flags(raw: Value) -> Result<Vec<CanonicalFlag>, CompilerError> {
    let config = RawConfig::from_value(raw)?;
    let raw_flags = normalize(config)?;
    tracing::debug!(count = raw_flags.len(), "normalized flags");

    let mut registry = NameRegistry::new();
    Ok(raw_flags
        .into_iter()
        .map(|flag| canonicalize_flag(flag, &mut registry))
        .collect())
}

fn canonicalize_flag(flag: RawFlag, registry: &mut NameRegistry) -> CanonicalFlag {
    let declared_type = VariationType::parse(&flag.variation_type);
    if declared_type == VariationType::Unknown
        && !flag.variation_type.eq_ignore_ascii_case(UNKNOWN_TYPE)
    {
        tracing::warn!(
            flag = %flag.key,
            variation_type = %flag.variation_type,
            "unrecognized variation type, values will be rendered as strings"
        );
    }

    let symbolic_name = registry.canonicalize(&flag.key);
    let variations = flag
        .variations
        .into_iter()
        .map(|v| Variation {
            variant_key: v.variant_key,
            value: coercer::coerce(v.value, declared_type),
        })
        .collect();

    CanonicalFlag {
        source_key: flag.key,
        symbolic_name,
        declared_type,
        variations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_dark_mode_file_shape() {
        let raw = json!({
            "flags": {
                "dark-mode": {
                    "variationType": "BOOLEAN",
                    "variations": {
                        "on": {"key": "on", "value": "true"},
                        "off": {"key": "off", "value": "false"}
                    }
                }
            }
        });

        let flags = compile_flags(raw).unwrap();
        assert_eq!(
            flags,
            vec![CanonicalFlag {
                source_key: "dark-mode".to_string(),
                symbolic_name: "DARK_MODE".to_string(),
                declared_type: VariationType::Boolean,
                variations: vec![
                    Variation {
                        variant_key: "on".to_string(),
                        value: json!(true),
                    },
                    Variation {
                        variant_key: "off".to_string(),
                        value: json!(false),
                    },
                ],
            }]
        );
    }

    #[test]
    fn test_colliding_keys_are_suffixed_in_input_order() {
        let raw = json!([
            {"key": "dark mode", "variation_type": "BOOLEAN"},
            {"key": "dark-mode", "variation_type": "BOOLEAN"}
        ]);

        let flags = compile_flags(raw).unwrap();
        let names: Vec<&str> = flags.iter().map(|f| f.symbolic_name.as_str()).collect();
        assert_eq!(names, ["DARK_MODE", "DARK_MODE_1"]);
        assert_eq!(flags[0].source_key, "dark mode");
        assert_eq!(flags[1].source_key, "dark-mode");
    }

    #[test]
    fn test_api_shape_coerces_by_declared_type() {
        let raw = json!([
            {
                "key": "max_retries",
                "variation_type": "NUMERIC",
                "variations": [
                    {"variant_key": "low", "value": "2"},
                    {"variant_key": "high", "value": 5}
                ]
            },
            {
                "key": "layout",
                "variation_type": "JSON",
                "variations": [
                    {"variant_key": "grid", "value": "{\"columns\": 3}"}
                ]
            },
            {
                "key": "banner",
                "variation_type": "mystery",
                "variations": [{"variant_key": "v", "value": 7}]
            }
        ]);

        let flags = compile_flags(raw).unwrap();
        assert_eq!(flags[0].variations[0].value, json!(2));
        assert_eq!(flags[0].variations[1].value, json!(5));
        assert_eq!(flags[1].variations[0].value, json!({"columns": 3}));
        assert_eq!(flags[2].declared_type, VariationType::Unknown);
        assert_eq!(flags[2].variations[0].value, json!("7"));
    }

    #[test]
    fn test_symbolic_names_are_unique() {
        let records: Vec<Value> = (0..40)
            .map(|i| json!({"key": format!("flag{}{}", if i % 2 == 0 { "-" } else { " " }, i % 10)}))
            .collect();

        let flags = compile_flags(Value::Array(records)).unwrap();
        let names: HashSet<&str> = flags.iter().map(|f| f.symbolic_name.as_str()).collect();
        assert_eq!(names.len(), flags.len());
    }

    #[test]
    fn test_empty_and_shapeless_inputs_fail() {
        for raw in [json!({}), json!([]), json!({"flags": {}})] {
            assert!(matches!(compile_flags(raw), Err(CompilerError::Shape(_))));
        }
    }

    #[test]
    fn test_flag_without_variations_compiles_to_empty_list() {
        let flags = compile_flags(json!({"flags": {"kill-switch": {"variationType": "BOOLEAN"}}}))
            .unwrap();
        assert!(flags[0].variations.is_empty());
        assert_eq!(flags[0].symbolic_name, "KILL_SWITCH");
    }

    #[test]
    fn test_parse_config_then_compile() {
        let content = r#"[{"key": "beta", "variation_type": "STRING", "variations": [{"variant_key": "a", "value": 1}]}]"#;
        let raw = parse_config(content, Some("flags.json")).unwrap();
        let flags = compile_flags(raw).unwrap();
        assert_eq!(flags[0].variations[0].value, json!("1"));
    }

    #[test]
    fn test_parse_config_error() {
        let result = parse_config("{not json", Some("flags.json"));
        assert!(matches!(
            result,
            Err(CompilerError::Parse(ParseError::InvalidJson(_)))
        ));
    }
}
