//! Inputs supplied by the host automation platform.
//!
//! The host passes `package`, `version` and `attempts` as strings. The first
//! two are required; `attempts` is parsed leniently and falls back when it is
//! absent or not a positive number.

use nupoll_core::error::NupollError;
use nupoll_core::types::ProbeRequest;
use crate::ConfigResult;

/// Raw, unvalidated inputs as the host supplied them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostInputs {
    pub package: Option<String>,
    pub version: Option<String>,
    pub attempts: Option<String>,
}

impl HostInputs {
    /// Build the probe request, failing on a missing or blank required input
    pub fn probe_request(&self) -> ConfigResult<ProbeRequest> {
        let package = required("package", self.package.as_deref())?;
        let version = required("version", self.version.as_deref())?;
        ProbeRequest::new(package, version)
    }

    /// The attempt budget requested by the host, if it parses to a positive number
    pub fn attempts(&self) -> Option<u32> {
        self.attempts.as_deref().and_then(parse_attempts)
    }
}

fn required<'a>(name: &str, value: Option<&'a str>) -> ConfigResult<&'a str> {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(NupollError::ConfigValidation {
            field: name.to_string(),
            reason: "Input required and not supplied".to_string(),
        }),
    }
}

/// Parse an attempt count the way the host reads integers.
///
/// Leading whitespace is skipped and the longest run of leading digits is
/// used, so `"3 attempts"` yields 3. Anything that does not produce a value of
/// at least 1 yields `None`.
pub fn parse_attempts(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if unsigned.starts_with('-') {
        return None;
    }

    let digits: String = unsigned.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    // Out-of-range counts saturate rather than fall back.
    let value = digits.parse::<u32>().unwrap_or(u32::MAX);
    (value >= 1).then_some(value)
}
