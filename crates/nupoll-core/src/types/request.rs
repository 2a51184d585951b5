//! Package identity and probe URL construction.

use crate::error::{NupollError, NupollResult};

/// Registry host queried when no other base URL is configured
pub const DEFAULT_REGISTRY_URL: &str = "https://www.nuget.org";

/// A package/version pair whose availability is being checked
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProbeRequest {
    package_name: String,
    package_version: String,
}

impl ProbeRequest {
    /// Create a request, rejecting empty or whitespace-only fields
    pub fn new(package_name: impl Into<String>, package_version: impl Into<String>) -> NupollResult<Self> {
        let package_name = package_name.into();
        let package_version = package_version.into();

        if package_name.trim().is_empty() {
            return Err(NupollError::ConfigValidation {
                field: "package".to_string(),
                reason: "Input required and not supplied".to_string(),
            });
        }
        if package_version.trim().is_empty() {
            return Err(NupollError::ConfigValidation {
                field: "version".to_string(),
                reason: "Input required and not supplied".to_string(),
            });
        }

        Ok(Self {
            package_name,
            package_version,
        })
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn package_version(&self) -> &str {
        &self.package_version
    }

    /// Build the probe URL against a registry base URL.
    ///
    /// Name and version are interpolated verbatim; any encoding is left to the
    /// transport. A trailing `/` on the base is dropped.
    pub fn url(&self, registry_url: &str) -> String {
        format!(
            "{}/api/v2/package/{}/{}",
            registry_url.trim_end_matches('/'),
            self.package_name,
            self.package_version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_url_against_default_registry() {
        let request = ProbeRequest::new("Newtonsoft.Json", "13.0.3").unwrap();
        assert_eq!(
            request.url(DEFAULT_REGISTRY_URL),
            "https://www.nuget.org/api/v2/package/Newtonsoft.Json/13.0.3"
        );
    }

    #[test]
    fn test_url_trims_trailing_slash() {
        let request = ProbeRequest::new("SomePackage", "1.0.0").unwrap();
        assert_eq!(
            request.url("http://127.0.0.1:8080/"),
            "http://127.0.0.1:8080/api/v2/package/SomePackage/1.0.0"
        );
    }

    #[test]
    fn test_url_is_not_encoded() {
        let request = ProbeRequest::new("My Package", "1.0.0-beta+build.5").unwrap();
        assert_eq!(
            request.url(DEFAULT_REGISTRY_URL),
            "https://www.nuget.org/api/v2/package/My Package/1.0.0-beta+build.5"
        );
    }

    #[test]
    fn test_empty_fields_rejected() {
        match ProbeRequest::new("", "1.0.0").unwrap_err() {
            NupollError::ConfigValidation { field, .. } => assert_eq!(field, "package"),
            other => panic!("Expected ConfigValidation, got {:?}", other),
        }
        match ProbeRequest::new("SomePackage", "  ").unwrap_err() {
            NupollError::ConfigValidation { field, .. } => assert_eq!(field, "version"),
            other => panic!("Expected ConfigValidation, got {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn test_url_ends_with_verbatim_identity(
            name in "[A-Za-z0-9._-]{1,40}",
            version in "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}(-[a-z0-9.]{1,10})?",
        ) {
            let request = ProbeRequest::new(name.clone(), version.clone()).unwrap();
            let url = request.url(DEFAULT_REGISTRY_URL);
            let expected_suffix = format!("/api/v2/package/{}/{}", name, version);
            prop_assert!(url.starts_with(DEFAULT_REGISTRY_URL));
            prop_assert!(url.ends_with(&expected_suffix));
        }
    }
}
