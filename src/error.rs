//! Error types for the leaktriage pipeline

use std::time::Duration;
use thiserror::Error;

/// Result type alias for leaktriage operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from external collaborators (classifier, credential provider, notifier)
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed against {0}")]
    Unauthorized(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded. Retry after {0:?}")]
    RateLimit(Duration),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to endpoint".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Create ~/.leaktriage/config.yaml or pass --config.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Confidence threshold {0} is outside [0.0, 1.0]")]
    InvalidThreshold(f64),

    #[error("Classifier endpoint not configured. Set `classifier_url` in the config file.")]
    MissingClassifierUrl,

    #[error("Credential provider endpoint not configured. Set `provider_url` in the config file.")]
    MissingProviderUrl,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Fatal scanner-input errors. Per-record problems are logged skips, never errors;
/// this type is reserved for input that prevents the run from starting at all.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Cannot read scanner output {path}: {reason}")]
    Unreadable { path: String, reason: String },
}
