//! Error types for the Gauntlet console

use thiserror::Error;

/// Result type alias for Gauntlet operations
pub type GauntletResult<T> = Result<T, GauntletError>;

/// Main error type for the Gauntlet console
#[derive(Error, Debug, Clone)]
pub enum GauntletError {
    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Agent service errors
    #[error("Agent error: {0}")]
    Agent(String),

    /// Judge service errors
    #[error("Judge error: {0}")]
    Judge(String),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(String),

    /// Invalid input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error with context
    #[error("Error: {0}")]
    Other(String),
}

impl GauntletError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a new agent service error
    pub fn agent(message: impl Into<String>) -> Self {
        Self::Agent(message.into())
    }

    /// Create a new judge service error
    pub fn judge(message: impl Into<String>) -> Self {
        Self::Judge(message.into())
    }

    /// Create a new invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

impl From<anyhow::Error> for GauntletError {
    fn from(error: anyhow::Error) -> Self {
        Self::Other(error.to_string())
    }
}

impl From<std::io::Error> for GauntletError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}

impl From<serde_json::Error> for GauntletError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error.to_string())
    }
}

impl From<reqwest::Error> for GauntletError {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(error.to_string())
    }
}
