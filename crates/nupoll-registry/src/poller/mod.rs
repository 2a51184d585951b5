//! Bounded, fixed-interval polling of the registry until a package is indexed.
//!
//! The session is a small state machine driven one probe at a time:
//!
//! | State          | Probe outcome              | Next state       |
//! |----------------|----------------------------|------------------|
//! | `Attempting(n)`| `Indexed`                  | `Succeeded`      |
//! | `Attempting(n)`| `NotIndexed`, n < max      | `Attempting(n+1)` after the delay |
//! | `Attempting(n)`| `NotIndexed`, n = max      | `ExhaustedFailure` |
//! | `Attempting(n)`| `TransportError`           | `FatalError`     |
//!
//! A cancelled delay moves the session to `Cancelled`. Every terminal state
//! except `Succeeded` is reported once through [`Reporter::set_failed`].

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use nupoll_core::error::NupollError;
use nupoll_core::types::{
    PollConfig, PollResult, PollState, ProbeOutcome, ProbeRequest, DEFAULT_REGISTRY_URL,
};
use crate::probe::Probe;
use crate::report::{PollEvent, Reporter};

/// Drives repeated probes for one package/version pair
pub struct Poller<'a> {
    probe: &'a dyn Probe,
    reporter: &'a dyn Reporter,
    registry_url: String,
    cancel: CancellationToken,
}

impl<'a> Poller<'a> {
    /// Create a poller against the default registry
    pub fn new(probe: &'a dyn Probe, reporter: &'a dyn Reporter) -> Self {
        Self {
            probe,
            reporter,
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            cancel: CancellationToken::new(),
        }
    }

    /// Query a different registry base URL
    pub fn with_registry_url(mut self, registry_url: impl Into<String>) -> Self {
        self.registry_url = registry_url.into();
        self
    }

    /// Allow the delay between attempts to be interrupted.
    ///
    /// The token is only observed while waiting; an in-flight probe always
    /// completes.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Run one poll session to a terminal state
    pub async fn poll(&self, request: &ProbeRequest, config: &PollConfig) -> PollResult {
        let url = request.url(&self.registry_url);
        let mut state = PollState::Attempting(1);
        let mut attempts_made = 0;

        while let PollState::Attempting(attempt) = state {
            attempts_made = attempt;
            state = self.attempt(attempt, &url, request, config).await;
        }

        if let Some(failure) = self.failure(&state, request, attempts_made) {
            self.reporter.set_failed(&failure);
        }

        PollResult {
            succeeded: state == PollState::Succeeded,
            attempts_made,
        }
    }

    /// Probe once and compute the next state
    async fn attempt(
        &self,
        attempt: u32,
        url: &str,
        request: &ProbeRequest,
        config: &PollConfig,
    ) -> PollState {
        let max_attempts = config.max_attempts();
        self.reporter.progress(&PollEvent::Probing { attempt, max_attempts });
        debug!("Probing {} (attempt {} of {})", url, attempt, max_attempts);

        match self.probe.probe(url).await {
            ProbeOutcome::Indexed => {
                debug!(
                    "Package {} version {} is indexed on {}.",
                    request.package_name(),
                    request.package_version(),
                    self.registry_host()
                );
                self.reporter.progress(&PollEvent::Indexed { attempt });
                PollState::Succeeded
            }
            ProbeOutcome::NotIndexed if attempt < max_attempts => {
                let delay = config.delay();
                debug!(
                    "Attempt {} of {}: Package not indexed yet. Retrying in {} seconds...",
                    attempt,
                    max_attempts,
                    delay.as_secs_f64()
                );
                self.reporter.progress(&PollEvent::Waiting {
                    attempt,
                    max_attempts,
                    delay,
                });

                if self.wait(delay).await {
                    PollState::Attempting(attempt + 1)
                } else {
                    PollState::Cancelled
                }
            }
            ProbeOutcome::NotIndexed => PollState::ExhaustedFailure,
            ProbeOutcome::TransportError(failure) => PollState::FatalError(failure),
        }
    }

    /// Wait out the inter-attempt delay. Returns `false` if cancelled.
    async fn wait(&self, delay: Duration) -> bool {
        if delay.is_zero() {
            tokio::task::yield_now().await;
            return !self.cancel.is_cancelled();
        }

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => false,
            _ = tokio::time::sleep(delay) => true,
        }
    }

    /// The failure to signal for a terminal state, if any
    fn failure(
        &self,
        state: &PollState,
        request: &ProbeRequest,
        attempts_made: u32,
    ) -> Option<NupollError> {
        let failure = match state {
            PollState::Attempting(_) | PollState::Succeeded => return None,
            PollState::ExhaustedFailure => NupollError::NotIndexed {
                package: request.package_name().to_string(),
                version: request.package_version().to_string(),
                attempts: attempts_made,
            },
            PollState::FatalError(failure) => NupollError::Transport(failure.clone()),
            PollState::Cancelled => NupollError::Cancelled {
                package: request.package_name().to_string(),
                version: request.package_version().to_string(),
                attempts: attempts_made,
            },
        };

        debug!("Poll session ended in {:?}: {}", state, failure);
        Some(failure)
    }

    fn registry_host(&self) -> String {
        reqwest::Url::parse(&self.registry_url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_else(|| self.registry_url.clone())
    }
}
