//! Normalization-only command
//!
//! Parses and deduplicates scanner output without contacting any
//! collaborator. Useful for inspecting what a full run would triage.

use std::collections::BTreeMap;

use log::info;
use tabled::Tabled;

use crate::cli::args::{NormalizeArgs, OutputFormat};
use crate::error::Result;
use crate::model::Finding;
use crate::output;
use crate::pipeline::normalize;

#[derive(Debug, Tabled)]
struct CategoryRow {
    #[tabled(rename = "CATEGORY")]
    category: String,
    #[tabled(rename = "FINDINGS")]
    count: usize,
}

pub fn run(args: NormalizeArgs, format: OutputFormat) -> Result<()> {
    let findings = normalize::load_findings(&args.input)?;

    match &args.out {
        Some(path) => {
            output::write_artifact(path, &findings)?;
            info!("Wrote {} findings to {}", findings.len(), path.display());
        }
        None => {
            let artifact = output::Artifact::new(&findings);
            println!("{}", serde_json::to_string_pretty(&artifact)?);
        }
    }

    if args.stats {
        println!("{}", stats_table(&findings, format)?);
    }

    Ok(())
}

fn stats_table(findings: &[Finding], format: OutputFormat) -> Result<String> {
    let mut by_category: BTreeMap<String, usize> = BTreeMap::new();
    for finding in findings {
        *by_category
            .entry(finding.category.key().to_string())
            .or_insert(0) += 1;
    }

    if matches!(format, OutputFormat::Json) {
        return Ok(serde_json::to_string_pretty(&by_category)?);
    }

    let rows: Vec<CategoryRow> = by_category
        .into_iter()
        .map(|(category, count)| CategoryRow { category, count })
        .collect();
    Ok(output::format_table(&rows))
}
