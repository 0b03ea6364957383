//! Status command implementation

use colored::Colorize;

use crate::config::Config;
use crate::error::Result;

/// Show configuration and endpoint status
pub fn run(config_path: Option<&str>) -> Result<()> {
    println!("{}\n", "Leaktriage Configuration Status".bold());

    let resolved_path = match config_path {
        Some(path) => std::path::PathBuf::from(path),
        None => Config::default_path()?,
    };

    match Config::load_at(config_path.map(std::path::Path::new)) {
        Ok(config) => {
            println!(
                "Config file: {}",
                resolved_path.display().to_string().cyan()
            );
            println!();

            endpoint_line("Classifier endpoint", config.classifier_url.as_deref());
            endpoint_line("Credential provider", config.provider_url.as_deref());
            if config.webhook_url.is_some() {
                println!("{} Notification webhook configured", "✓".green());
            } else {
                println!(
                    "{} No notification webhook (summaries stay local)",
                    "○".dimmed()
                );
            }

            println!();
            println!("Threshold:       {}", config.pipeline.threshold);
            println!("Max concurrency: {}", config.pipeline.max_concurrency);
            println!("Output dir:      {}", config.pipeline.out_dir.display());
            println!();
        }
        Err(e) => {
            println!("{} Configuration not usable: {}", "✗".red(), e);
            println!();
            println!(
                "Create {} with `classifier_url` and `provider_url`.",
                resolved_path.display().to_string().cyan()
            );
            println!();
        }
    }

    Ok(())
}

fn endpoint_line(name: &str, url: Option<&str>) {
    match url {
        Some(url) => println!("{} {}: {}", "✓".green(), name, url.cyan()),
        None => println!("{} {} not configured", "✗".red(), name),
    }
}
