//! Error types and result aliases for nupoll operations.
//!
//! Provides a unified error type covering configuration, transport and poll
//! session failures, with messages written for the operator reading CI logs.

use thiserror::Error;

use crate::types::TransportFailure;

/// Unified error type for all nupoll operations
#[derive(Error, Debug)]
pub enum NupollError {
    // Config errors
    #[error("Failed to parse nupoll.toml: {message}")]
    TomlParse { message: String },

    #[error("Configuration field '{field}' is invalid: {reason}")]
    ConfigValidation { field: String, reason: String },

    // Registry errors
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("{0}")]
    Transport(TransportFailure),

    // Poll session errors
    #[error("Package {package} version {version} was not indexed after {attempts} attempts.")]
    NotIndexed {
        package: String,
        version: String,
        attempts: u32,
    },

    #[error("Polling for package {package} version {version} was cancelled after {attempts} attempts.")]
    Cancelled {
        package: String,
        version: String,
        attempts: u32,
    },

    // IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for nupoll operations
pub type NupollResult<T> = Result<T, NupollError>;

impl NupollError {
    /// Create a network error from any error type
    pub fn network<E>(message: String, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Network {
            message,
            source: Some(Box::new(source)),
        }
    }

    /// Create an IO error from std::io::Error
    pub fn io(message: String, source: std::io::Error) -> Self {
        Self::Io { message, source }
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            NupollError::NotIndexed { .. } => {
                Some("Indexing can take several minutes; raise 'attempts' to wait longer")
            }
            NupollError::Transport(TransportFailure::NoResponse { .. }) => {
                Some("Check network access to the registry and try again")
            }
            NupollError::Transport(TransportFailure::HttpStatus { .. }) => {
                Some("The registry returned an unexpected status; check its service status")
            }
            NupollError::ConfigValidation { .. } | NupollError::TomlParse { .. } => {
                Some("Check the action inputs and nupoll.toml")
            }
            _ => None,
        }
    }
}

impl From<TransportFailure> for NupollError {
    fn from(failure: TransportFailure) -> Self {
        NupollError::Transport(failure)
    }
}
