//! Poll session configuration, state machine states and result.

use std::time::Duration;

use crate::error::{NupollError, NupollResult};
use super::TransportFailure;

/// Attempts made when the host supplies none
pub const DEFAULT_ATTEMPTS: u32 = 1;

/// Pause between consecutive attempts
pub const DEFAULT_DELAY: Duration = Duration::from_millis(30_000);

/// Bounds for one poll session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    max_attempts: u32,
    delay: Duration,
}

impl PollConfig {
    /// Create a config with the default delay
    pub fn new(max_attempts: u32) -> NupollResult<Self> {
        Self::with_delay(max_attempts, DEFAULT_DELAY)
    }

    /// Create a config with an explicit delay; `max_attempts` must be at least 1
    pub fn with_delay(max_attempts: u32, delay: Duration) -> NupollResult<Self> {
        if max_attempts == 0 {
            return Err(NupollError::ConfigValidation {
                field: "attempts".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(Self { max_attempts, delay })
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_ATTEMPTS,
            delay: DEFAULT_DELAY,
        }
    }
}

/// States of the poll state machine.
///
/// `Attempting(n)` is the only non-terminal state; `n` is 1-indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollState {
    Attempting(u32),
    Succeeded,
    ExhaustedFailure,
    FatalError(TransportFailure),
    Cancelled,
}

impl PollState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PollState::Attempting(_))
    }
}

/// Final outcome of a poll session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollResult {
    pub succeeded: bool,
    pub attempts_made: u32,
}
