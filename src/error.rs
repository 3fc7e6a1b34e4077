//! Error types for the Home Assistant lights skill

use thiserror::Error;

/// Result type alias for skill operations
pub type Result<T> = std::result::Result<T, SkillError>;

/// Error types raised while loading configuration or talking to the hub.
///
/// Request-level failures never surface as errors to the voice pipeline:
/// the dispatcher turns them into a spoken failure phrase. These variants
/// exist for startup, the hub client and the stdio runner.
#[derive(Error, Debug)]
pub enum SkillError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration source could not be read or deserialized
    #[error("Configuration source error: {0}")]
    ConfigSource(#[from] ::config::ConfigError),

    /// Connection errors
    #[error("Connection error: {0}")]
    Connection(String),

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing errors
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid hub URL
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SkillError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a connection error
    pub fn connection<S: Into<String>>(msg: S) -> Self {
        Self::Connection(msg.into())
    }

    /// Check if error comes from the configuration layer
    pub fn is_config_error(&self) -> bool {
        matches!(self, SkillError::Config(_) | SkillError::ConfigSource(_))
    }
}
