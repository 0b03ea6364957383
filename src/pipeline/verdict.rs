//! Verdict engine
//!
//! Applies the per-run confidence threshold to produce one verdict per
//! finding. Pure and deterministic: identical (confidence, threshold) input
//! always yields the identical decision.

use std::collections::HashMap;

use crate::model::{Confidence, Decision, Finding, Verdict};

/// Decide for one finding.
///
/// `Confirmed` when the score meets the threshold, or when the confidence is
/// unknown (classifier infrastructure failed): an unclassifiable finding is
/// never silently suppressed.
pub fn evaluate(finding_id: &str, confidence: Confidence, threshold: f64) -> Verdict {
    let decision = match confidence {
        Confidence::Score(score) if score >= threshold => Decision::Confirmed,
        Confidence::Score(_) => Decision::Suppressed,
        Confidence::Unknown => Decision::Confirmed,
    };

    Verdict {
        finding_id: finding_id.to_string(),
        confidence,
        decision,
        threshold,
    }
}

/// Evaluate the whole batch in finding order.
///
/// A finding missing from the confidence map is treated as `Unknown`; the
/// classifier adapter always produces an entry per finding, but the verdict
/// engine does not depend on that.
pub fn evaluate_all(
    findings: &[Finding],
    confidences: &HashMap<String, Confidence>,
    threshold: f64,
) -> Vec<Verdict> {
    findings
        .iter()
        .map(|f| {
            let confidence = confidences
                .get(&f.id)
                .copied()
                .unwrap_or(Confidence::Unknown);
            evaluate(&f.id, confidence, threshold)
        })
        .collect()
}
