//! Progress and failure reporting seam between the poller and its host.

use std::time::Duration;

use parking_lot::Mutex;

use nupoll_core::error::NupollError;

/// Progress notifications emitted during a poll session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollEvent {
    /// A probe is about to be issued
    Probing { attempt: u32, max_attempts: u32 },
    /// The probe missed and the poller is waiting before the next attempt
    Waiting {
        attempt: u32,
        max_attempts: u32,
        delay: Duration,
    },
    /// The package was found
    Indexed { attempt: u32 },
}

/// Receives progress and the terminal failure signal from a poll session.
///
/// `set_failed` is called at most once per session and only when the session
/// does not succeed.
pub trait Reporter: Send + Sync {
    fn progress(&self, event: &PollEvent);

    fn set_failed(&self, error: &NupollError);
}

/// Reporter that keeps everything it receives in memory
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<PollEvent>>,
    failures: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All progress events in the order received
    pub fn events(&self) -> Vec<PollEvent> {
        self.events.lock().clone()
    }

    /// Number of inter-attempt waits that were started
    pub fn waits(&self) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|event| matches!(event, PollEvent::Waiting { .. }))
            .count()
    }

    /// Number of probes that were issued
    pub fn probes(&self) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|event| matches!(event, PollEvent::Probing { .. }))
            .count()
    }

    /// Failure messages signaled so far
    pub fn failures(&self) -> Vec<String> {
        self.failures.lock().clone()
    }

    pub fn has_failed(&self) -> bool {
        !self.failures.lock().is_empty()
    }
}

impl Reporter for RecordingReporter {
    fn progress(&self, event: &PollEvent) {
        self.events.lock().push(event.clone());
    }

    fn set_failed(&self, error: &NupollError) {
        self.failures.lock().push(error.to_string());
    }
}
