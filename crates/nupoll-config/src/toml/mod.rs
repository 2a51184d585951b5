//! nupoll.toml parsing

use serde::{Deserialize, Serialize};
use nupoll_core::error::NupollError;
use crate::ConfigResult;

/// Complete nupoll.toml configuration. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NupollToml {
    /// Registry connection settings
    #[serde(default)]
    pub registry: RegistrySection,

    /// Poll session settings
    #[serde(default)]
    pub poll: PollSection,
}

/// `[registry]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct RegistrySection {
    /// Base URL of the registry host
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Per-request timeout in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// User-Agent header sent with each probe
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// `[poll]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PollSection {
    /// Maximum probe attempts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempts: Option<u32>,

    /// Delay between attempts in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u64>,
}

/// Parse nupoll.toml content
pub fn parse_nupoll_toml(content: &str) -> ConfigResult<NupollToml> {
    let config: NupollToml = toml::from_str(content).map_err(|e| NupollError::TomlParse {
        message: e.message().to_string(),
    })?;

    validate_config(&config)?;
    Ok(config)
}

/// Reject values that can never form a usable session
pub fn validate_config(config: &NupollToml) -> ConfigResult<()> {
    if config.poll.attempts == Some(0) {
        return Err(NupollError::ConfigValidation {
            field: "poll.attempts".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    if config.registry.timeout_secs == Some(0) {
        return Err(NupollError::ConfigValidation {
            field: "registry.timeout-secs".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    if let Some(user_agent) = &config.registry.user_agent {
        if user_agent.trim().is_empty() {
            return Err(NupollError::ConfigValidation {
                field: "registry.user-agent".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
    }

    Ok(())
}

/// Load nupoll.toml from file
pub async fn load_from_file(path: &camino::Utf8Path) -> ConfigResult<NupollToml> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| NupollError::io(format!("Failed to read {}", path), e))?;

    parse_nupoll_toml(&content)
}
