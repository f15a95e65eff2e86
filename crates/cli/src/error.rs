//! CLI error types

use flagtable_compiler::{CompilerError, ParseError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Compiler(#[from] CompilerError),

    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Failed to parse {origin}: {error}")]
    Parse { origin: String, error: ParseError },

    #[error("Missing API key: pass --api-key or set {0}")]
    MissingCredential(&'static str),

    #[error("Failed to render flag table: {0}")]
    Render(String),

    #[error("Invalid settings file {path}: {message}")]
    Config { path: String, message: String },

    #[error("{0}")]
    Message(String),
}

pub type CliResult<T> = Result<T, CliError>;
