//! Mock collaborators for unit tests
//!
//! Configure scripted responses via builder methods, then hand the mock to a
//! pipeline stage as the relevant trait object. Call logs let tests verify
//! exactly which side effects were attempted.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{Classifier, CredentialProvider, CredentialStatus, Notifier};
use crate::error::{ApiError, Result};
use crate::model::{RunSummary, SecretCategory};

/// Scripted classifier: per-text scores, a default, and per-text failures.
pub struct MockClassifier {
    scores: HashMap<String, f64>,
    default_score: f64,
    failing_texts: HashSet<String>,
    calls: AtomicUsize,
}

impl MockClassifier {
    pub fn new(default_score: f64) -> Self {
        Self {
            scores: HashMap::new(),
            default_score,
            failing_texts: HashSet::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_score(mut self, text: &str, score: f64) -> Self {
        self.scores.insert(text.to_string(), score);
        self
    }

    /// Simulate classifier infrastructure failure for one input
    pub fn with_failure(mut self, text: &str) -> Self {
        self.failing_texts.insert(text.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Classifier for MockClassifier {
    async fn classify(&self, text: &str, _category: SecretCategory) -> Result<f64> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.failing_texts.contains(text) {
            return Err(ApiError::Timeout.into());
        }
        Ok(self.scores.get(text).copied().unwrap_or(self.default_score))
    }
}

/// Scripted credential provider with a mutable status table and call logs.
///
/// `deactivate` flips the stored status to inactive, so repeated dispatch
/// against the same credential exercises the real idempotency path.
pub struct MockProvider {
    statuses: Arc<Mutex<HashMap<String, CredentialStatus>>>,
    deactivate_log: Arc<Mutex<Vec<String>>>,
    status_calls: AtomicUsize,
    failing_ids: HashSet<String>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            statuses: Arc::new(Mutex::new(HashMap::new())),
            deactivate_log: Arc::new(Mutex::new(Vec::new())),
            status_calls: AtomicUsize::new(0),
            failing_ids: HashSet::new(),
        }
    }

    pub fn with_status(self, credential_id: &str, status: CredentialStatus) -> Self {
        self.statuses
            .try_lock()
            .expect("builder used before any await")
            .insert(credential_id.to_string(), status);
        self
    }

    /// Simulate a provider failure on deactivation of one credential
    pub fn with_deactivate_failure(mut self, credential_id: &str) -> Self {
        self.failing_ids.insert(credential_id.to_string());
        self
    }

    pub async fn deactivate_calls(&self) -> Vec<String> {
        self.deactivate_log.lock().await.clone()
    }

    pub fn status_call_count(&self) -> usize {
        self.status_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialProvider for MockProvider {
    async fn get_status(&self, credential_id: &str) -> Result<CredentialStatus> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);

        let statuses = self.statuses.lock().await;
        statuses
            .get(credential_id)
            .copied()
            .ok_or_else(|| ApiError::NotFound(format!("credential {}", credential_id)).into())
    }

    async fn deactivate(&self, credential_id: &str) -> Result<()> {
        self.deactivate_log
            .lock()
            .await
            .push(credential_id.to_string());

        if self.failing_ids.contains(credential_id) {
            return Err(ApiError::ServerError("deactivation rejected".to_string()).into());
        }

        self.statuses
            .lock()
            .await
            .insert(credential_id.to_string(), CredentialStatus::Inactive);
        Ok(())
    }
}

/// Notifier that records deliveries, optionally failing every attempt.
pub struct MockNotifier {
    delivered: Arc<Mutex<Vec<RunSummary>>>,
    fail: bool,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self {
            delivered: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            delivered: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }

    pub async fn deliveries(&self) -> Vec<RunSummary> {
        self.delivered.lock().await.clone()
    }
}

impl Default for MockNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn notify(&self, summary: &RunSummary) -> Result<()> {
        if self.fail {
            return Err(ApiError::Network("webhook unreachable".to_string()).into());
        }
        self.delivered.lock().await.push(summary.clone());
        Ok(())
    }
}
