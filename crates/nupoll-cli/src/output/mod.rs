//! Terminal output formatting and utilities.
//!
//! This module provides consistent output for the poll session: progress
//! lines, the success line and failure rendering.

pub mod colors;
pub mod errors;

use nupoll_core::error::NupollError;

/// Output handler for consistent terminal formatting
pub struct OutputHandler {
    colors: colors::ColorSupport,
    /// Emit failures as workflow commands instead of human-readable errors
    annotations: bool,
}

impl OutputHandler {
    /// Create an output handler for the current environment
    pub fn new() -> Self {
        Self {
            colors: colors::ColorSupport::detect(),
            annotations: std::env::var("GITHUB_ACTIONS").as_deref() == Ok("true"),
        }
    }

    /// Create a plain output handler with no colors or annotations
    pub fn plain() -> Self {
        Self {
            colors: colors::ColorSupport::disabled(),
            annotations: false,
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        println!("{}", self.colors.dim(message));
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("{} {}", self.colors.green("✓"), message);
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        println!("{} {}", self.colors.yellow("⚠"), message);
    }

    /// Report a failure to the host
    pub fn failure(&self, error: &NupollError) {
        let formatter = errors::ErrorFormatter::new(self.colors);
        if self.annotations {
            println!("{}", formatter.format_annotation(error));
        } else {
            eprint!("{}", formatter.format_error(error));
        }
    }
}

impl Default for OutputHandler {
    fn default() -> Self {
        Self::new()
    }
}
