//! Error message formatting with actionable suggestions.
//!
//! Failures are rendered either for a human terminal (colored, with a help
//! line and the source chain) or as a workflow command that the automation
//! host turns into an error annotation.

use std::error::Error;

use nupoll_core::error::NupollError;
use super::colors::ColorSupport;

/// Error formatter with suggestions
pub struct ErrorFormatter {
    colors: ColorSupport,
}

impl ErrorFormatter {
    pub fn new(colors: ColorSupport) -> Self {
        Self { colors }
    }

    /// Format an error with suggestion and source chain
    pub fn format_error(&self, error: &NupollError) -> String {
        let mut output = String::new();

        output.push_str(&self.colors.red("error"));
        output.push_str(": ");
        output.push_str(&error.to_string());
        output.push('\n');

        if let Some(suggestion) = error.suggestion() {
            output.push('\n');
            output.push_str(&self.colors.dim("help"));
            output.push_str(": ");
            output.push_str(suggestion);
            output.push('\n');
        }

        let mut source = error.source();
        while let Some(err) = source {
            output.push('\n');
            output.push_str(&self.colors.dim("caused by"));
            output.push_str(": ");
            output.push_str(&err.to_string());
            source = err.source();
        }

        output
    }

    /// Format an error as an `::error::` workflow command
    pub fn format_annotation(&self, error: &NupollError) -> String {
        format!("::error::{}", escape_data(&error.to_string()))
    }
}

/// Escape a workflow command payload so it stays on one line
fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
