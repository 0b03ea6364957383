//! External collaborator boundaries
//!
//! The pipeline only ever talks to the classifier, the credential provider,
//! and the notifier through these traits; any implementation satisfying the
//! contracts is substitutable (remote endpoint, local model, test double).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{RunSummary, SecretCategory};

pub mod inference;
pub mod keyvault;
#[cfg(test)]
pub mod mock;
pub mod webhook;

pub use inference::InferenceClient;
pub use keyvault::KeyVaultClient;
pub use webhook::WebhookNotifier;

/// Classification capability: one finding's text and category in, a
/// confidence in [0.0, 1.0] out.
///
/// Calls are independent and side-effect free, so the pipeline issues them
/// concurrently. Implementations must bound their latency (request timeout);
/// any error is translated by the caller into a fail-safe `Unknown` score.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, text: &str, category: SecretCategory) -> Result<f64>;
}

/// Current lifecycle state of a provider-managed credential
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialStatus {
    Active,
    Inactive,
}

/// Credential management capability.
///
/// `get_status` must be safe to call repeatedly with no side effect; the
/// dispatcher relies on that for its status-check-then-act idempotency.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn get_status(&self, credential_id: &str) -> Result<CredentialStatus>;

    async fn deactivate(&self, credential_id: &str) -> Result<()>;
}

/// Notification capability. Delivery retries are the collaborator's problem;
/// the pipeline makes exactly one dispatch attempt per run.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, summary: &RunSummary) -> Result<()>;
}

/// Provider wrapper for `--dry-run`: status checks pass through (read-only),
/// deactivations are logged and reported successful without touching the
/// provider.
pub struct DryRunProvider<P> {
    inner: P,
}

impl<P> DryRunProvider<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<P: CredentialProvider> CredentialProvider for DryRunProvider<P> {
    async fn get_status(&self, credential_id: &str) -> Result<CredentialStatus> {
        self.inner.get_status(credential_id).await
    }

    async fn deactivate(&self, credential_id: &str) -> Result<()> {
        log::info!("dry-run: would deactivate credential {}", credential_id);
        Ok(())
    }
}
