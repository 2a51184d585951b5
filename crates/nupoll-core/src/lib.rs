//! # nupoll-core
//!
//! Core types and errors shared across the nupoll crates.
//!
//! This crate provides:
//! - `ProbeRequest` and the probe URL it derives
//! - `ProbeOutcome` / `TransportFailure`, the three-way classification of one probe
//! - `PollConfig`, `PollState` and `PollResult` for a poll session
//! - `NupollError` for unified error handling
//!
//! ## Architecture
//!
//! - `types`: Request, outcome and session types
//! - `error`: Error types and result aliases

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{NupollError, NupollResult};
pub use types::{
    PollConfig, PollResult, PollState, ProbeOutcome, ProbeRequest, TransportFailure,
    DEFAULT_ATTEMPTS, DEFAULT_DELAY, DEFAULT_REGISTRY_URL,
};
