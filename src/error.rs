//! Unified error types for Vue-Lens

use thiserror::Error;

/// Unified Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for Vue-Lens
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Selector argument was defined but not a string
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// Detected Vue major version below the supported floor
    #[error("Unsupported Vue version: {0}")]
    UnsupportedVueVersion(String),

    /// Page evaluation failed or returned an unexpected result shape
    #[error("Evaluation error: {0}")]
    Evaluation(String),

    /// Timeout
    #[error("Operation timeout: {0}")]
    Timeout(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new invalid selector error
    pub fn invalid_selector<S: Into<String>>(msg: S) -> Self {
        Error::InvalidSelector(msg.into())
    }

    /// Create a new unsupported Vue version error
    pub fn unsupported_vue_version<S: Into<String>>(msg: S) -> Self {
        Error::UnsupportedVueVersion(msg.into())
    }

    /// Create a new evaluation error
    pub fn evaluation<S: Into<String>>(msg: S) -> Self {
        Error::Evaluation(msg.into())
    }

    /// Create a new timeout error
    pub fn timeout<S: Into<String>>(msg: S) -> Self {
        Error::Timeout(msg.into())
    }

    /// Create a new configuration error
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Error::Configuration(msg.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Error::Internal(msg.into())
    }
}
