//! The finding triage pipeline
//!
//! Normalizer -> Classifier Adapter -> Verdict Engine -> Remediation
//! Dispatcher -> Reporter. Each stage consumes the prior stage's full batch
//! and emits an augmented batch keyed by finding id; no stage reaches back
//! into raw scanner state.

pub mod classify;
pub mod normalize;
pub mod remediate;
pub mod report;
pub mod verdict;
