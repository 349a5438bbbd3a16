pub mod batch_config;
pub mod cli;

#[cfg(feature = "cli")]
use crate::domain::model::ProblemKind;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "warmup")]
#[command(about = "Solve small warm-up exercises from the command line or a TOML batch file")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Solve a single problem; each argument is parsed as JSON, falling back to a string
    Solve {
        problem: ProblemKind,
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Run every task of a TOML batch file
    Batch {
        /// Path to the batch file
        #[arg(short, long, default_value = "warmup.toml")]
        config: PathBuf,

        /// Write the JSON report to this file
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// List the available problems and their parameters
    List,
}

/// Reads a command-line argument as JSON; bare words become strings.
pub fn parse_cli_argument(raw: &str) -> serde_json::Value {
    serde_json::from_str(raw).unwrap_or_else(|_| serde_json::Value::String(raw.to_string()))
}
