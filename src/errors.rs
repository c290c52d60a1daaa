//! Centralized error handling.
//!
//! Provides a structured error type for configuration loading, so a missing
//! or malformed variable fails at startup with a clear diagnostic instead of
//! surfacing deep inside the consuming framework.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingVar(&'static str),

    #[error("invalid value {value:?} for {var}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("failed to load env file {}: {source}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("required section {0} is not configured")]
    NotConfigured(&'static str),

    #[error("failed to serialize configuration")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience constructors
impl ConfigError {
    pub fn invalid(var: &'static str, value: impl Into<String>, reason: &'static str) -> Self {
        ConfigError::InvalidValue {
            var,
            value: value.into(),
            reason,
        }
    }
}
