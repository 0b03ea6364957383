//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod context;
pub mod normalize;
pub mod run;
pub mod status;

pub use args::{NormalizeArgs, OutputFormat, RunArgs};
pub use context::CommandContext;

/// Leaktriage - classify secret-detector findings and contain confirmed leaks
#[derive(Parser, Debug)]
#[command(name = "leaktriage")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "LEAKTRIAGE_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "LEAKTRIAGE_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "LEAKTRIAGE_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full triage pipeline against scanner output
    Run(RunArgs),

    /// Normalize scanner output without classification or remediation
    Normalize(NormalizeArgs),

    /// Show configuration and endpoint status
    Status,

    /// Display version information
    Version,
}
