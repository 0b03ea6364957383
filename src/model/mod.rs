//! Domain records flowing through the pipeline
//!
//! Each stage consumes the prior stage's batch and emits an augmented batch;
//! records are immutable once created and correlated by finding id.

pub mod finding;
pub mod remediation;
pub mod run;
pub mod verdict;

pub use finding::{Finding, SecretCategory, finding_id};
pub use remediation::{RemediationAction, RemediationOutcome};
pub use run::{FindingDetail, PipelineRun, RunSummary};
pub use verdict::{Confidence, Decision, Verdict};
