//! Leaktriage CLI - triage secret-detector findings and contain confirmed leaks

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod model;
mod output;
mod pipeline;

use cli::{Cli, Commands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --debug; default keeps collaborator noise down
    let default_level = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Run(args) => cli::run::run(args, cli.format, cli.config.as_deref()).await,
        Commands::Normalize(args) => cli::normalize::run(args, cli.format),
        Commands::Status => cli::status::run(cli.config.as_deref()),
        Commands::Version => {
            println!("leaktriage version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
