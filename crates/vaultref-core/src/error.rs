//! Error types for vaultref-core

use thiserror::Error;

/// Result type alias using vaultref-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for vaultref
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration or input file not found
    #[error("File not found: {path}")]
    ConfigNotFound { path: String },

    /// Invalid configuration or input format
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Namespace prefix that can never match a reference key
    #[error("Invalid secret namespace prefix '{prefix}': {reason}")]
    InvalidNamespace { prefix: String, reason: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an invalid namespace error
    pub fn invalid_namespace(prefix: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidNamespace {
            prefix: prefix.into(),
            reason: reason.into(),
        }
    }

    /// Map an IO error on `path`, reporting a missing file as `ConfigNotFound`
    pub fn from_io(path: impl Into<String>, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            Self::config_not_found(path)
        } else {
            Self::Io(error)
        }
    }
}
