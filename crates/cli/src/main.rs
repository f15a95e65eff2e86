//! Flagtable CLI
//!
//! Copyright 2025 Release Workshop Ltd
//! Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
//! See the LICENSE file in the project root for details.

mod commands;
mod error;
mod generator;
mod source;
mod utils;

#[cfg(test)]
mod test_helpers;

use clap::{CommandFactory, Parser, Subcommand};
use commands::{completion, generate};

/// Flagtable CLI - Generate typed feature flag tables
#[derive(Parser)]
#[command(name = "flagtable")]
#[command(about = "Flagtable CLI - Generate typed feature flag tables", long_about = None)]
#[command(version = env!("FLAGTABLE_VERSION"))]
struct Cli {
    /// Print debug logs to stderr (FLAGTABLE_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a flag table from a config file or the provider API
    Generate {
        /// Path to a JSON or YAML flag configuration file
        #[arg(long, conflicts_with = "api")]
        file: Option<String>,
        /// Fetch flag configuration from the provider API
        #[arg(long)]
        api: bool,
        /// API key (defaults to the EPPO_API_KEY environment variable)
        #[arg(long, requires = "api")]
        api_key: Option<String>,
        /// Override the provider API endpoint
        #[arg(long, requires = "api")]
        api_url: Option<String>,
        /// Output file (default: feature-flags.generated.ts)
        #[arg(short, long)]
        output: Option<String>,
        /// Target language (default: typescript)
        #[arg(long)]
        lang: Option<String>,
    },
    /// Print a shell completion script
    Completion {
        /// Shell to generate completions for (bash, zsh, fish)
        shell: String,
    },
}

/// Command structure, used for shell completions
pub fn get_cli_command() -> clap::Command {
    Cli::command()
}

fn main() {
    // Usage errors exit with 1 like every other handled failure
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    utils::logging::init_logging(cli.verbose);

    let exit_code = match cli.command {
        Commands::Generate {
            file,
            api,
            api_key,
            api_url,
            output,
            lang,
        } => {
            let opts = generate::Options {
                file,
                api,
                api_key,
                api_url,
                output,
                lang,
            };
            generate::run(&opts)
        }
        Commands::Completion { shell } => completion::run(&completion::Options { shell }),
    };

    std::process::exit(exit_code);
}
