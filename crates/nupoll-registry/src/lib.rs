//! Registry probing and index polling for nupoll
//!
//! This crate checks whether a published package version has become
//! available on the registry. `probe` performs and classifies one HTTP check;
//! `poller` repeats it on a fixed interval within an attempt budget and reports
//! the terminal failure, if any, through a `Reporter`.

pub mod poller;
pub mod probe;
pub mod report;

// Re-export main types
pub use poller::Poller;
pub use probe::{Probe, ProbeSettings, RegistryProbe};
pub use report::{PollEvent, RecordingReporter, Reporter};

use nupoll_core::error::NupollError;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, NupollError>;
