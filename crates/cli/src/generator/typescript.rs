//! TypeScript flag table generator
//!
//! Emits a single module holding a `const` table of all flags plus type
//! aliases for enumerating names and looking up entries.

use crate::error::{CliError, CliResult};
use crate::generator::literal::{quote_string, render_literal};
use crate::generator::{format_timestamp, Generator};
use chrono::{DateTime, Utc};
use flagtable_compiler::CanonicalFlag;
use serde::Serialize;
use tera::{Context, Tera};

const TEMPLATE_NAME: &str = "flags.ts.tera";

pub const TABLE_NAME: &str = "FEATURE_FLAGS";
pub const NAME_TYPE: &str = "FeatureFlagName";
pub const ENTRY_TYPE: &str = "FeatureFlag";
pub const KEY_TYPE: &str = "FeatureFlagKey";
pub const VALUE_TYPE: &str = "FeatureFlagValue";

/// TypeScript flag table generator
pub struct TypeScriptGenerator {
    tera: Tera,
}

/// Template view of one flag; every field is an already-rendered literal
#[derive(Debug, Serialize)]
struct FlagEntry {
    name: String,
    key: String,
    flag_type: String,
    variations: Vec<VariationEntry>,
}

#[derive(Debug, Serialize)]
struct VariationEntry {
    key: String,
    value: String,
}

impl TypeScriptGenerator {
    pub fn new() -> CliResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, include_str!("templates/flags.ts.tera"))
            .map_err(|e| CliError::Render(format!("Failed to load {TEMPLATE_NAME}: {e}")))?;

        // Auto-escape is disabled for TypeScript code generation
        tera.autoescape_on(vec![]);

        Ok(Self { tera })
    }

    fn flag_entry(flag: &CanonicalFlag) -> FlagEntry {
        FlagEntry {
            name: quote_string(&flag.symbolic_name),
            key: quote_string(&flag.source_key),
            flag_type: quote_string(flag.declared_type.as_str()),
            variations: flag
                .variations
                .iter()
                .map(|v| VariationEntry {
                    key: quote_string(&v.variant_key),
                    value: render_literal(&v.value),
                })
                .collect(),
        }
    }

    /// Keep the label on its comment line
    fn header_label(source_label: &str) -> String {
        source_label
            .chars()
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect()
    }
}

impl Generator for TypeScriptGenerator {
    fn render(
        &self,
        flags: &[CanonicalFlag],
        source_label: &str,
        generated_at: DateTime<Utc>,
    ) -> CliResult<String> {
        let entries: Vec<FlagEntry> = flags.iter().map(Self::flag_entry).collect();

        let mut context = Context::new();
        context.insert("source_label", &Self::header_label(source_label));
        context.insert("generated_at", &format_timestamp(generated_at));
        context.insert("table_name", TABLE_NAME);
        context.insert("name_type", NAME_TYPE);
        context.insert("entry_type", ENTRY_TYPE);
        context.insert("key_type", KEY_TYPE);
        context.insert("value_type", VALUE_TYPE);
        context.insert("flags", &entries);

        self.tera
            .render(TEMPLATE_NAME, &context)
            .map_err(|e| CliError::Render(format!("Failed to render {TEMPLATE_NAME}: {e}")))
    }
}
