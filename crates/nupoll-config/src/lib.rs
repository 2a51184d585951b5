//! Configuration parsing for nupoll
//!
//! This crate handles the optional nupoll.toml file, the inputs supplied by the
//! host automation platform, and the layering that turns them into one
//! validated `Settings` value.

pub mod input;
pub mod merge;
pub mod toml;

// Re-export main types
pub use input::{parse_attempts, HostInputs};
pub use merge::{ConfigLoader, Overrides, Settings};
pub use crate::toml::{NupollToml, PollSection, RegistrySection};

use nupoll_core::error::NupollError;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, NupollError>;
