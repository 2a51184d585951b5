//! Single HTTP existence check against the registry

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};

use nupoll_core::error::NupollError;
use nupoll_core::types::{ProbeOutcome, TransportFailure};
use crate::RegistryResult;

/// One existence check against a probe URL.
///
/// Implementations perform exactly one request and never retry; retry policy
/// belongs to the poller.
#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self, url: &str) -> ProbeOutcome;
}

/// Transport settings for the registry probe
#[derive(Debug, Clone)]
pub struct ProbeSettings {
    /// Upper bound on one request, connection included
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("nupoll/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// HTTP probe backed by a pooled reqwest client
#[derive(Debug, Clone)]
pub struct RegistryProbe {
    /// Underlying HTTP client, reused across attempts
    client: Client,
}

impl RegistryProbe {
    /// Create a probe with default transport settings
    pub fn new() -> RegistryResult<Self> {
        Self::with_settings(ProbeSettings::default())
    }

    /// Create a probe with custom transport settings
    pub fn with_settings(settings: ProbeSettings) -> RegistryResult<Self> {
        let client = ClientBuilder::new()
            .pool_idle_timeout(Duration::from_secs(90))
            .timeout(settings.timeout)
            .gzip(true)
            .user_agent(settings.user_agent)
            .build()
            .map_err(|e| NupollError::network("Failed to create HTTP client".to_string(), e))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Probe for RegistryProbe {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        match self.client.get(url).send().await {
            Ok(response) => classify_status(response.status()),
            Err(error) => classify_error(&error),
        }
    }
}

/// Map a completed response's status onto the three-way outcome
pub fn classify_status(status: StatusCode) -> ProbeOutcome {
    match status {
        StatusCode::OK => ProbeOutcome::Indexed,
        StatusCode::NOT_FOUND => ProbeOutcome::NotIndexed,
        status => ProbeOutcome::TransportError(TransportFailure::HttpStatus {
            status: status.as_u16(),
            reason: status.canonical_reason().map(str::to_string),
        }),
    }
}

/// Map a transport failure onto the three-way outcome
fn classify_error(error: &reqwest::Error) -> ProbeOutcome {
    // Only `error_for_status` attaches a status.
    if let Some(status) = error.status() {
        return classify_status(status);
    }

    let detail = if error.is_timeout() {
        format!("request timed out: {}", error)
    } else if error.is_connect() {
        format!("connection failed: {}", error)
    } else {
        error.to_string()
    };

    ProbeOutcome::TransportError(TransportFailure::NoResponse { detail })
}
