//! Core data types for a nupoll session.
//!
//! This module provides the values that flow between the probe and the poller:
//! - The package identity being checked and the URL it derives
//! - The three-way outcome of a single probe
//! - Poll session configuration, state and result

pub mod outcome;
pub mod poll;
pub mod request;

// Re-export all public types
pub use outcome::{ProbeOutcome, TransportFailure};
pub use poll::{PollConfig, PollResult, PollState, DEFAULT_ATTEMPTS, DEFAULT_DELAY};
pub use request::{ProbeRequest, DEFAULT_REGISTRY_URL};
