//! Configuration layering: built-in defaults, then nupoll.toml, then host/CLI overrides

use std::time::Duration;
use camino::Utf8PathBuf;
use nupoll_core::error::NupollError;
use nupoll_core::types::{PollConfig, DEFAULT_ATTEMPTS, DEFAULT_DELAY, DEFAULT_REGISTRY_URL};
use crate::{ConfigResult, toml::NupollToml};

/// Default per-request transport timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fully resolved settings for one invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub registry_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    pub attempts: u32,
    pub delay: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("nupoll/{}", env!("CARGO_PKG_VERSION")),
            attempts: DEFAULT_ATTEMPTS,
            delay: DEFAULT_DELAY,
        }
    }
}

impl Settings {
    /// Check that the merged settings describe a usable session
    pub fn validate(&self) -> ConfigResult<()> {
        let url = url::Url::parse(&self.registry_url).map_err(|e| NupollError::ConfigValidation {
            field: "registry-url".to_string(),
            reason: format!("'{}' is not a valid URL: {}", self.registry_url, e),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(NupollError::ConfigValidation {
                field: "registry-url".to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        if self.timeout.is_zero() {
            return Err(NupollError::ConfigValidation {
                field: "timeout".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Poll session bounds derived from these settings
    pub fn poll_config(&self) -> ConfigResult<PollConfig> {
        PollConfig::with_delay(self.attempts, self.delay)
    }

    /// Host name used in progress messages
    pub fn registry_host(&self) -> String {
        url::Url::parse(&self.registry_url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_else(|| self.registry_url.clone())
    }
}

/// Highest-priority values, from CLI flags or host-supplied environment
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub registry_url: Option<String>,
    /// Already parsed with `parse_attempts`; `None` means absent or unusable
    pub attempts: Option<u32>,
    pub delay_ms: Option<u64>,
    pub timeout_secs: Option<u64>,
}

/// Main configuration loading interface
pub struct ConfigLoader {
    /// Optional nupoll.toml location
    config_path: Option<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new(config_path: Option<Utf8PathBuf>) -> Self {
        Self { config_path }
    }

    /// Load the file layer (if any), apply overrides and validate
    pub async fn load(&self, overrides: &Overrides) -> ConfigResult<Settings> {
        let file = match &self.config_path {
            Some(path) => Some(crate::toml::load_from_file(path).await?),
            None => None,
        };

        let settings = Self::merge(file, overrides);
        settings.validate()?;
        Ok(settings)
    }

    /// Merge layers without touching the filesystem
    pub fn merge(file: Option<NupollToml>, overrides: &Overrides) -> Settings {
        let mut settings = Settings::default();

        if let Some(file) = file {
            if let Some(url) = file.registry.url {
                settings.registry_url = url;
            }
            if let Some(secs) = file.registry.timeout_secs {
                settings.timeout = Duration::from_secs(secs);
            }
            if let Some(user_agent) = file.registry.user_agent {
                settings.user_agent = user_agent;
            }
            if let Some(attempts) = file.poll.attempts {
                settings.attempts = attempts;
            }
            if let Some(delay_ms) = file.poll.delay_ms {
                settings.delay = Duration::from_millis(delay_ms);
            }
        }

        if let Some(url) = &overrides.registry_url {
            settings.registry_url = url.clone();
        }
        if let Some(attempts) = overrides.attempts {
            settings.attempts = attempts;
        }
        if let Some(delay_ms) = overrides.delay_ms {
            settings.delay = Duration::from_millis(delay_ms);
        }
        if let Some(secs) = overrides.timeout_secs {
            settings.timeout = Duration::from_secs(secs);
        }

        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toml::{PollSection, RegistrySection};
    use tempfile::TempDir;

    fn create_test_file() -> NupollToml {
        NupollToml {
            registry: RegistrySection {
                url: Some("https://nuget.internal.example/".to_string()),
                timeout_secs: Some(5),
                user_agent: None,
            },
            poll: PollSection {
                attempts: Some(10),
                delay_ms: Some(2000),
            },
        }
    }

    #[test]
    fn test_defaults_only() {
        let settings = ConfigLoader::merge(None, &Overrides::default());
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.attempts, 1);
        assert_eq!(settings.delay, Duration::from_millis(30_000));
        assert_eq!(settings.registry_url, "https://www.nuget.org");
        assert!(settings.user_agent.starts_with("nupoll/"));
    }

    #[test]
    fn test_file_layer_over_defaults() {
        let settings = ConfigLoader::merge(Some(create_test_file()), &Overrides::default());
        assert_eq!(settings.registry_url, "https://nuget.internal.example/");
        assert_eq!(settings.timeout, Duration::from_secs(5));
        assert_eq!(settings.attempts, 10);
        assert_eq!(settings.delay, Duration::from_millis(2000));
    }

    #[test]
    fn test_overrides_win() {
        let overrides = Overrides {
            registry_url: Some("http://127.0.0.1:9000".to_string()),
            attempts: Some(3),
            delay_ms: Some(1),
            timeout_secs: None,
        };
        let settings = ConfigLoader::merge(Some(create_test_file()), &overrides);
        assert_eq!(settings.registry_url, "http://127.0.0.1:9000");
        assert_eq!(settings.attempts, 3);
        assert_eq!(settings.delay, Duration::from_millis(1));
        assert_eq!(settings.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_absent_attempts_falls_through_to_file() {
        let overrides = Overrides {
            attempts: None,
            ..Overrides::default()
        };
        let settings = ConfigLoader::merge(Some(create_test_file()), &overrides);
        assert_eq!(settings.attempts, 10);
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        let mut settings = Settings::default();
        settings.registry_url = "not a url".to_string();
        assert!(settings.validate().is_err());

        settings.registry_url = "ftp://nuget.org".to_string();
        assert!(settings.validate().is_err());

        settings.registry_url = "http://localhost:8080".to_string();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_registry_host() {
        let settings = Settings::default();
        assert_eq!(settings.registry_host(), "www.nuget.org");
    }

    #[test]
    fn test_poll_config_from_settings() {
        let settings = ConfigLoader::merge(Some(create_test_file()), &Overrides::default());
        let config = settings.poll_config().unwrap();
        assert_eq!(config.max_attempts(), 10);
        assert_eq!(config.delay(), Duration::from_millis(2000));
    }

    #[test]
    fn test_load_with_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(temp_dir.path().join("nupoll.toml")).unwrap();
        std::fs::write(&path, "[poll]\nattempts = 6\ndelay-ms = 100\n").unwrap();

        let loader = ConfigLoader::new(Some(path));
        let settings = tokio_test::block_on(loader.load(&Overrides::default())).unwrap();
        assert_eq!(settings.attempts, 6);
        assert_eq!(settings.delay, Duration::from_millis(100));
    }

    #[test]
    fn test_load_rejects_invalid_override() {
        let loader = ConfigLoader::new(None);
        let overrides = Overrides {
            registry_url: Some("registry".to_string()),
            ..Overrides::default()
        };
        assert!(tokio_test::block_on(loader.load(&overrides)).is_err());
    }
}
