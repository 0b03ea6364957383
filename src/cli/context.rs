//! Command execution context
//!
//! Loads configuration once and hands out configured collaborator clients,
//! so command handlers never repeat endpoint wiring.

use crate::cli::OutputFormat;
use crate::client::{InferenceClient, KeyVaultClient, WebhookNotifier};
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing config and runtime options
pub struct CommandContext {
    /// Loaded and validated configuration
    pub config: Config,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Load config from the explicit path or the default location.
    pub fn new(format: OutputFormat, config_path: Option<&str>) -> Result<Self> {
        let config = Config::load_at(config_path.map(std::path::Path::new))?;
        Ok(Self { config, format })
    }

    /// Classifier client for the configured inference endpoint
    pub fn classifier(&self) -> Result<InferenceClient> {
        let url = self.config.require_classifier_url()?;
        InferenceClient::new(url, self.config.request_timeout())
    }

    /// Credential provider client for the configured key vault endpoint
    pub fn provider(&self) -> Result<KeyVaultClient> {
        let url = self.config.require_provider_url()?;
        KeyVaultClient::new(url, self.config.request_timeout())
    }

    /// Webhook notifier, absent when no webhook is configured
    pub fn notifier(&self) -> Result<Option<WebhookNotifier>> {
        match self.config.webhook_url.as_deref() {
            Some(url) => Ok(Some(WebhookNotifier::new(
                url,
                self.config.request_timeout(),
            )?)),
            None => Ok(None),
        }
    }
}
