//! Full triage run command

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};

use crate::cli::args::{OutputFormat, RunArgs};
use crate::cli::context::CommandContext;
use crate::client::{CredentialProvider, DryRunProvider};
use crate::error::Result;
use crate::model::{Decision, PipelineRun};
use crate::output;
use crate::pipeline::remediate::{CancelFlag, Dispatcher};
use crate::pipeline::{classify, normalize, report, verdict};

/// Run the full pipeline: normalize, classify, decide, remediate, report.
///
/// Per-item failures are captured in outcomes, never escalated; the command
/// only errors when a whole stage cannot run (unreadable input, missing
/// endpoint configuration).
pub async fn run(args: RunArgs, format: OutputFormat, config_path: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(format, config_path)?;

    let threshold = args.threshold.unwrap_or(ctx.config.pipeline.threshold);
    let out_dir = args
        .out_dir
        .clone()
        .unwrap_or_else(|| ctx.config.pipeline.out_dir.clone());
    let max_concurrency = ctx.config.pipeline.max_concurrency;

    // Fail on missing endpoints before reading anything
    let classifier = ctx.classifier()?;
    let keyvault = ctx.provider()?;
    let provider: Box<dyn CredentialProvider> = if args.dry_run {
        info!("Dry run: credential deactivations will be simulated");
        Box::new(DryRunProvider::new(keyvault))
    } else {
        Box::new(keyvault)
    };

    // An empty batch still produces artifacts and a notification: "ran and
    // found nothing" must be distinguishable from "never ran"
    let findings = normalize::load_findings(&args.input)?;
    if findings.is_empty() {
        info!("No findings in {}", args.input.display());
    }

    // Ctrl-C stops starting new remediations; in-flight ones finish
    let cancel = CancelFlag::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupt received, finishing in-flight work");
                cancel.cancel();
            }
        });
    }

    let progress = classification_bar(findings.len() as u64, ctx.format);
    let confidences =
        classify::classify_findings(&classifier, &findings, max_concurrency, progress.as_ref())
            .await;
    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    let verdicts = verdict::evaluate_all(&findings, &confidences, threshold);

    let confirmed: Vec<_> = findings
        .iter()
        .zip(&verdicts)
        .filter(|(_, v)| v.decision == Decision::Confirmed)
        .map(|(f, _)| f)
        .collect();
    info!(
        "{} of {} findings confirmed at threshold {}",
        confirmed.len(),
        findings.len(),
        threshold
    );

    let dispatcher = Dispatcher::new(provider.as_ref(), max_concurrency);
    let outcomes = dispatcher.dispatch(&confirmed, &cancel).await;

    let run = PipelineRun {
        findings,
        verdicts,
        outcomes,
    };
    let summary = report::build_summary(&run);

    output::write_run_artifacts(&out_dir, &run, &summary)?;
    info!("Run artifacts written to {}", out_dir.display());

    println!("{}", output::render_summary(&summary, ctx.format)?);

    if args.no_notify {
        info!("Notification skipped (--no-notify)");
    } else if let Some(notifier) = ctx.notifier()? {
        report::dispatch_notification(&notifier, &summary).await;
    } else {
        info!("No webhook configured, notification skipped");
    }

    if summary.failed_remediations > 0 {
        eprintln!(
            "{} {} remediation(s) failed; see {}",
            "warning:".yellow().bold(),
            summary.failed_remediations,
            out_dir.join("remediations.json").display()
        );
    }

    Ok(())
}

fn classification_bar(len: u64, format: OutputFormat) -> Option<ProgressBar> {
    if !matches!(format, OutputFormat::Pretty) {
        return None;
    }
    let bar = ProgressBar::new(len);
    bar.set_style(
        ProgressStyle::with_template("{spinner} classifying [{bar:30}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    Some(bar)
}
