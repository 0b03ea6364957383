//! JSON artifacts written at the end of a run

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{PipelineRun, RunSummary};

/// Wrapper for persisted artifacts with generation metadata
#[derive(Debug, Serialize, Deserialize)]
pub struct Artifact<T> {
    /// When the artifact was generated
    pub generated_at: DateTime<Utc>,

    /// CLI version that produced it
    pub tool_version: String,

    /// The actual records
    pub data: T,
}

impl<T> Artifact<T> {
    pub fn new(data: T) -> Self {
        Self {
            generated_at: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            data,
        }
    }
}

/// Write one artifact as pretty-printed JSON
pub fn write_artifact<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let artifact = Artifact::new(data);
    let contents = serde_json::to_string_pretty(&artifact)?;
    std::fs::write(path, contents)?;
    Ok(())
}

/// Persist the per-stage record sets and the summary under `out_dir`.
///
/// One file per stage so downstream tooling can consume each record set
/// without re-running the pipeline.
pub fn write_run_artifacts(out_dir: &Path, run: &PipelineRun, summary: &RunSummary) -> Result<()> {
    std::fs::create_dir_all(out_dir)?;

    write_artifact(&out_dir.join("findings.json"), &run.findings)?;
    write_artifact(&out_dir.join("verdicts.json"), &run.verdicts)?;
    write_artifact(&out_dir.join("remediations.json"), &run.outcomes)?;
    write_artifact(&out_dir.join("summary.json"), summary)?;

    Ok(())
}
