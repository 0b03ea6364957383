//! Output formatting for CLI results

use colored::Colorize;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::model::RunSummary;

pub mod json;
pub mod table;

pub use json::{Artifact, write_artifact, write_run_artifacts};
pub use table::{DetailRow, format_table, truncate};

/// Render the run summary for the terminal in the requested format
pub fn render_summary(summary: &RunSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&Artifact::new(summary))?),
        OutputFormat::Table => Ok(format_table(&detail_rows(summary))),
        OutputFormat::Pretty => Ok(render_pretty(summary)),
    }
}

fn detail_rows(summary: &RunSummary) -> Vec<DetailRow> {
    summary.details.iter().map(DetailRow::from).collect()
}

fn render_pretty(summary: &RunSummary) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{}\n\n",
        "Secret leak triage".bold().underline()
    ));
    out.push_str(&format!(
        "  Findings:    {}\n",
        summary.total_findings.to_string().bold()
    ));
    out.push_str(&format!(
        "  Confirmed:   {}\n",
        style_count(summary.confirmed, |s| s.red())
    ));
    out.push_str(&format!("  Suppressed:  {}\n", summary.suppressed));
    out.push_str(&format!(
        "  Deactivated: {}\n",
        style_count(summary.deactivated, |s| s.green())
    ));
    if summary.classifier_failures > 0 {
        out.push_str(&format!(
            "  Unscored:    {} (classifier unavailable, confirmed fail-safe)\n",
            style_count(summary.classifier_failures, |s| s.yellow())
        ));
    }
    if summary.failed_remediations > 0 {
        out.push_str(&format!(
            "  Failed:      {}\n",
            style_count(summary.failed_remediations, |s| s.red().bold())
        ));
    }

    if !summary.by_category.is_empty() {
        out.push('\n');
        for (category, count) in &summary.by_category {
            out.push_str(&format!("  {:>4}  {}\n", count, category));
        }
    }

    out.push('\n');
    out.push_str(&format_table(&detail_rows(summary)));
    out.push('\n');
    out
}

fn style_count(count: usize, style: impl Fn(&str) -> colored::ColoredString) -> String {
    let text = count.to_string();
    if count > 0 {
        style(&text).to_string()
    } else {
        text
    }
}
