//! CLI commands

pub mod completion;
pub mod generate;
