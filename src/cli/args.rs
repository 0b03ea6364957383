//! Shared CLI argument types

use std::path::PathBuf;

use clap::Args;

use crate::config;

/// Output format options
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - human-optimized rich formatting (default)
    #[default]
    Pretty,
    /// Table format - one row per finding
    Table,
    /// JSON format - structured for scripts/APIs
    Json,
}

/// Arguments for the full triage run
#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// Scanner output file (JSON array, JSONL, or findings wrapper)
    #[arg(long, short = 'i')]
    pub input: PathBuf,

    /// Confidence threshold in [0.0, 1.0] (overrides config)
    #[arg(
        long,
        short = 't',
        env = "LEAKTRIAGE_THRESHOLD",
        hide_env = true,
        value_parser = parse_threshold
    )]
    pub threshold: Option<f64>,

    /// Directory for run artifacts (overrides config)
    #[arg(long, env = "LEAKTRIAGE_OUT_DIR", hide_env = true)]
    pub out_dir: Option<PathBuf>,

    /// Report what would be deactivated without touching the provider
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Skip the end-of-run webhook notification
    #[arg(long)]
    pub no_notify: bool,
}

/// Arguments for normalization-only runs
#[derive(Debug, Clone, Args)]
pub struct NormalizeArgs {
    /// Scanner output file (JSON array, JSONL, or findings wrapper)
    #[arg(long, short = 'i')]
    pub input: PathBuf,

    /// Write normalized findings to this file instead of stdout
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,

    /// Print per-category statistics
    #[arg(long)]
    pub stats: bool,
}

/// Validate `--threshold` at parse time so a bad value fails before any
/// collaborator is contacted.
pub fn parse_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    config::validate_threshold(value).map_err(|e| e.to_string())
}
