//! Classification of a single probe.

use std::fmt;

/// Result of one HTTP existence check.
///
/// Only `NotIndexed` is retryable. A `TransportError` ends the poll session
/// regardless of how many attempts remain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Registry answered 200
    Indexed,
    /// Registry answered 404
    NotIndexed,
    /// No response, or a status other than 200/404
    TransportError(TransportFailure),
}

impl ProbeOutcome {
    /// Whether this outcome should be retried after a delay
    pub fn is_retryable(&self) -> bool {
        matches!(self, ProbeOutcome::NotIndexed)
    }
}

/// Why a probe could not be classified as indexed or not indexed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    /// The request never produced a response (DNS, refused connection, timeout)
    NoResponse { detail: String },
    /// A response arrived with a status that has no defined meaning
    HttpStatus { status: u16, reason: Option<String> },
}

impl TransportFailure {
    /// Status code carried by the failure, if a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportFailure::NoResponse { .. } => None,
            TransportFailure::HttpStatus { status, .. } => Some(*status),
        }
    }
}

impl fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportFailure::NoResponse { detail } if detail.is_empty() => {
                write!(f, "Network error or no response received")
            }
            TransportFailure::NoResponse { detail } => {
                write!(f, "Network error or no response received: {}", detail)
            }
            TransportFailure::HttpStatus { status, reason: Some(reason) } => {
                write!(f, "HTTP error: Request failed with status code {} {}", status, reason)
            }
            TransportFailure::HttpStatus { status, reason: None } => {
                write!(f, "HTTP error: Request failed with status code {}", status)
            }
        }
    }
}
