//! Configuration management for leaktriage

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Classifier inference endpoint base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifier_url: Option<String>,

    /// Credential provider endpoint base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_url: Option<String>,

    /// Notification webhook URL; notifications are skipped when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    /// Pipeline tuning knobs
    #[serde(default)]
    pub pipeline: PipelineSettings,
}

/// Pipeline tuning knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSettings {
    /// Confidence threshold applied by the verdict engine
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Maximum in-flight classifier / provider calls
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    /// Per-request timeout in seconds for collaborator calls
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Directory where run artifacts are written
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
}

fn default_threshold() -> f64 {
    0.5
}

fn default_max_concurrency() -> usize {
    8
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("triage-out")
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            max_concurrency: default_max_concurrency(),
            request_timeout_secs: default_request_timeout_secs(),
            out_dir: default_out_dir(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            classifier_url: None,
            provider_url: None,
            webhook_url: None,
            pipeline: PipelineSettings::default(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".leaktriage").join("config.yaml"))
    }

    /// Load configuration, preferring an explicit path over the default.
    ///
    /// With an explicit path the file must exist; with the default path a
    /// missing file yields the built-in defaults, since every setting can
    /// also arrive via flags and environment.
    pub fn load_at(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path.to_path_buf()),
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::load_from(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        validate_threshold(config.pipeline.threshold)?;
        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Endpoints and webhook URLs can embed credentials
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    pub fn require_classifier_url(&self) -> Result<&str> {
        self.classifier_url
            .as_deref()
            .ok_or_else(|| ConfigError::MissingClassifierUrl.into())
    }

    pub fn require_provider_url(&self) -> Result<&str> {
        self.provider_url
            .as_deref()
            .ok_or_else(|| ConfigError::MissingProviderUrl.into())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.pipeline.request_timeout_secs)
    }
}

/// Reject thresholds outside [0.0, 1.0]; out-of-range values are an operator
/// mistake, never silently clamped.
pub fn validate_threshold(threshold: f64) -> Result<f64> {
    if threshold.is_finite() && (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(ConfigError::InvalidThreshold(threshold).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.classifier_url.is_none());
        assert!(config.webhook_url.is_none());
        assert_eq!(config.pipeline.threshold, 0.5);
        assert_eq!(config.pipeline.max_concurrency, 8);
        assert_eq!(config.pipeline.out_dir, PathBuf::from("triage-out"));
    }

    #[test]
    fn test_validate_threshold_bounds() {
        assert!(validate_threshold(0.0).is_ok());
        assert!(validate_threshold(0.5).is_ok());
        assert!(validate_threshold(1.0).is_ok());

        for bad in [-0.1, 1.1, f64::NAN, f64::INFINITY] {
            match validate_threshold(bad) {
                Err(Error::Config(ConfigError::InvalidThreshold(_))) => (),
                other => panic!("Expected InvalidThreshold, got {:?}", other.map(|_| ())),
            }
        }
    }

    #[test]
    fn test_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let mut config = Config::default();
        config.classifier_url = Some("http://localhost:9000".to_string());
        config.pipeline.threshold = 0.7;
        config.save_to(path.clone()).unwrap();

        let loaded = Config::load_from(path).unwrap();
        assert_eq!(
            loaded.classifier_url.as_deref(),
            Some("http://localhost:9000")
        );
        assert_eq!(loaded.pipeline.threshold, 0.7);
    }

    #[test]
    fn test_load_rejects_out_of_range_threshold() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "pipeline:\n  threshold: 2.5\n").unwrap();

        match Config::load_from(path) {
            Err(Error::Config(ConfigError::InvalidThreshold(t))) => assert_eq!(t, 2.5),
            other => panic!("Expected InvalidThreshold, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_load_missing_explicit_path_is_error() {
        match Config::load_at(Some(Path::new("/nonexistent/config.yaml"))) {
            Err(Error::Config(ConfigError::NotFound)) => (),
            other => panic!("Expected NotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_require_endpoints() {
        let config = Config::default();
        assert!(config.require_classifier_url().is_err());
        assert!(config.require_provider_url().is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_config_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        Config::default().save_to(path.clone()).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
