//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around the credential and URL
//! strings a client is built from. Invalid values are rejected on
//! construction with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated API username.
///
/// Mailgun authenticates with HTTP Basic auth where the username is the
/// literal string `api` for primary-account keys, so most callers pass
/// exactly that. The newtype only enforces non-emptiness.
///
/// # Example
///
/// ```rust
/// use mailgun_api::Username;
///
/// let username = Username::new("api").unwrap();
/// assert_eq!(username.as_ref(), "api");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Creates a new validated username.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUsername`] if the username is empty.
    pub fn new(username: impl Into<String>) -> Result<Self, ConfigError> {
        let username = username.into();
        if username.is_empty() {
            return Err(ConfigError::EmptyUsername);
        }
        Ok(Self(username))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Mailgun API key.
///
/// The key is the secret half of the Basic credential pair. Its value is
/// masked in debug output so it cannot leak through logs.
///
/// # Security
///
/// The `Debug` implementation displays `ApiKey(*****)` instead of the
/// actual key.
///
/// # Example
///
/// ```rust
/// use mailgun_api::ApiKey;
///
/// let key = ApiKey::new("key-1234").unwrap();
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated API base URL.
///
/// The URL must carry a scheme and a host; anything after the host
/// (port, path) is accepted as-is. Trailing slashes are tolerated —
/// request paths are joined with normalized slash handling regardless.
///
/// # Example
///
/// ```rust
/// use mailgun_api::ApiUrl;
///
/// let url = ApiUrl::new("https://api.eu.mailgun.net").unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.as_ref(), "https://api.eu.mailgun.net");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiUrl {
    url: String,
    scheme_end: usize,
}

impl ApiUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] if the URL has no scheme
    /// or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidApiUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidApiUrl { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if url[host_start..host_end].is_empty() {
            return Err(ConfigError::InvalidApiUrl { url: url.clone() });
        }

        Ok(Self { url, scheme_end })
    }

    /// Returns the URL scheme (e.g. "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rejects_empty_string() {
        let result = Username::new("");
        assert!(matches!(result, Err(ConfigError::EmptyUsername)));
    }

    #[test]
    fn test_username_accepts_api_literal() {
        let username = Username::new("api").unwrap();
        assert_eq!(username.as_ref(), "api");
    }

    #[test]
    fn test_api_key_rejects_empty_string() {
        let result = ApiKey::new("");
        assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_masks_value_in_debug() {
        let key = ApiKey::new("key-super-secret").unwrap();
        let debug_output = format!("{:?}", key);
        assert_eq!(debug_output, "ApiKey(*****)");
        assert!(!debug_output.contains("super-secret"));
    }

    #[test]
    fn test_api_key_exposes_value_via_as_ref() {
        let key = ApiKey::new("key-1234").unwrap();
        assert_eq!(key.as_ref(), "key-1234");
    }

    #[test]
    fn test_api_url_accepts_standard_endpoints() {
        for url in [
            "https://api.mailgun.net",
            "https://api.eu.mailgun.net",
            "http://localhost:8080",
            "https://api.mailgun.net/",
        ] {
            assert!(ApiUrl::new(url).is_ok(), "expected {url} to validate");
        }
    }

    #[test]
    fn test_api_url_rejects_missing_scheme() {
        let result = ApiUrl::new("api.mailgun.net");
        assert!(matches!(result, Err(ConfigError::InvalidApiUrl { .. })));
    }

    #[test]
    fn test_api_url_rejects_missing_host() {
        let result = ApiUrl::new("https://");
        assert!(matches!(result, Err(ConfigError::InvalidApiUrl { .. })));
    }

    #[test]
    fn test_api_url_rejects_non_alphabetic_scheme() {
        let result = ApiUrl::new("1ttp://api.mailgun.net");
        assert!(matches!(result, Err(ConfigError::InvalidApiUrl { .. })));
    }

    #[test]
    fn test_api_url_trims_whitespace() {
        let url = ApiUrl::new("  https://api.mailgun.net  ").unwrap();
        assert_eq!(url.as_ref(), "https://api.mailgun.net");
    }

    #[test]
    fn test_api_url_scheme_accessor() {
        let url = ApiUrl::new("http://localhost:8080").unwrap();
        assert_eq!(url.scheme(), "http");
    }
}
