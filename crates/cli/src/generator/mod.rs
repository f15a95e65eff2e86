//! Flag table code generator
//!
//! Renders canonical flags into a source file for a target language.

pub mod literal;
pub mod typescript;


use crate::error::{CliError, CliResult};
use chrono::{DateTime, SecondsFormat, Utc};
use flagtable_compiler::CanonicalFlag;

/// Trait for flag table generators
pub trait Generator {
    /// Render the complete output file
    fn render(
        &self,
        flags: &[CanonicalFlag],
        source_label: &str,
        generated_at: DateTime<Utc>,
    ) -> CliResult<String>;
}

/// ISO-8601 UTC timestamp with millisecond precision, e.g. `2026-10-19T08:30:00.000Z`
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Look up the generator for a language
pub fn generator_for(language: &str) -> CliResult<Box<dyn Generator>> {
    match language.to_lowercase().as_str() {
        "typescript" | "ts" => Ok(Box::new(typescript::TypeScriptGenerator::new()?)),
        _ => Err(CliError::Message(format!(
            "Unsupported language: {}. Supported languages: typescript",
            language
        ))),
    }
}
