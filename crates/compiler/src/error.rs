/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */
use thiserror::Error;

pub use crate::parser::error::ParseError;

/// Top-level error type for the compiler
#[derive(Error, Debug)]
pub enum CompilerError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Config shape error: {0}")]
    Shape(#[from] ShapeError),
}

/// Errors raised when a parsed document is not a usable flag configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("expected an array of flags or an object with a \"flags\" mapping, found {0}")]
    UnrecognizedShape(String),

    #[error("configuration contains no flags")]
    Empty,

    #[error("invalid flag record: {0}")]
    InvalidRecord(String),

    #[error("flag list schema error: {0}")]
    Schema(String),
}
