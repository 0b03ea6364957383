//! Classification verdicts

use serde::{Deserialize, Serialize};

/// Classifier confidence for a finding.
///
/// `Unknown` marks findings the classifier could not score (endpoint down,
/// malformed response); the verdict engine fails safe on it. Serializes as a
/// bare number or `null` so the audit artifacts stay plain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Confidence {
    Score(f64),
    Unknown,
}

impl Confidence {
    pub fn is_unknown(&self) -> bool {
        matches!(self, Confidence::Unknown)
    }
}

/// Classification decision for a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Treated as a real secret requiring remediation
    Confirmed,
    /// Treated as a false positive, no remediation
    Suppressed,
}

/// Classification outcome for one finding. Created once by the verdict
/// engine and immutable afterwards.
///
/// The threshold is captured per record so each verdict is self-describing;
/// there is no process-wide threshold anywhere in the crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub finding_id: String,
    pub confidence: Confidence,
    pub decision: Decision,
    pub threshold: f64,
}
