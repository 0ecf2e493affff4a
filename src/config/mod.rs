//! Configuration types for the Mailgun client.
//!
//! This module provides the configuration a [`RequestClient`] is built
//! from: the Basic-auth credential pair, the API base URL, and any
//! default headers to attach to every request.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`MailgunConfig`]: the immutable client configuration
//! - [`MailgunConfigBuilder`]: a builder for constructing [`MailgunConfig`]
//! - [`Username`]: a validated Basic-auth username
//! - [`ApiKey`]: a validated API key with masked debug output
//! - [`ApiUrl`]: a validated API base URL
//!
//! # Example
//!
//! ```rust
//! use mailgun_api::{MailgunConfig, Username, ApiKey};
//!
//! let config = MailgunConfig::builder()
//!     .username(Username::new("api").unwrap())
//!     .key(ApiKey::new("key-1234").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.url().as_ref(), "https://api.mailgun.net");
//! ```
//!
//! [`RequestClient`]: crate::RequestClient

mod newtypes;

pub use newtypes::{ApiKey, ApiUrl, Username};

use std::collections::HashMap;

use crate::error::ConfigError;

/// The default API endpoint used when the builder is not given one.
pub const DEFAULT_API_URL: &str = "https://api.mailgun.net";

/// Configuration for the Mailgun client.
///
/// Holds the credential pair used to compute the `Authorization` header,
/// the base URL every request path is joined onto, and client-level
/// default headers. Immutable once built; there is no process-wide
/// configuration — each client owns its own instance.
///
/// # Thread Safety
///
/// `MailgunConfig` is `Clone`, `Send`, and `Sync`, making it safe to
/// share across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use mailgun_api::{MailgunConfig, Username, ApiKey, ApiUrl};
///
/// let config = MailgunConfig::builder()
///     .username(Username::new("api").unwrap())
///     .key(ApiKey::new("key-1234").unwrap())
///     .url(ApiUrl::new("https://api.eu.mailgun.net").unwrap())
///     .header("X-Mailgun-Tag", "newsletter")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.url().as_ref(), "https://api.eu.mailgun.net");
/// ```
#[derive(Clone, Debug)]
pub struct MailgunConfig {
    username: Username,
    key: ApiKey,
    url: ApiUrl,
    default_headers: HashMap<String, String>,
}

// Verify MailgunConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MailgunConfig>();
};

impl MailgunConfig {
    /// Creates a new builder for constructing a `MailgunConfig`.
    #[must_use]
    pub fn builder() -> MailgunConfigBuilder {
        MailgunConfigBuilder::new()
    }

    /// Returns the Basic-auth username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the API key.
    #[must_use]
    pub const fn key(&self) -> &ApiKey {
        &self.key
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn url(&self) -> &ApiUrl {
        &self.url
    }

    /// Returns the client-level default headers.
    ///
    /// These sit between the computed `Authorization` header and any
    /// per-call headers in the merge order.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }
}

/// Builder for constructing [`MailgunConfig`] instances.
///
/// Required fields are `username` and `key`. The base URL defaults to
/// [`DEFAULT_API_URL`] and the default-header map starts empty.
///
/// # Example
///
/// ```rust
/// use mailgun_api::{MailgunConfig, Username, ApiKey};
///
/// let config = MailgunConfig::builder()
///     .username(Username::new("api").unwrap())
///     .key(ApiKey::new("key-1234").unwrap())
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MailgunConfigBuilder {
    username: Option<Username>,
    key: Option<ApiKey>,
    url: Option<ApiUrl>,
    default_headers: HashMap<String, String>,
}

impl MailgunConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Basic-auth username (required).
    #[must_use]
    pub fn username(mut self, username: Username) -> Self {
        self.username = Some(username);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn key(mut self, key: ApiKey) -> Self {
        self.key = Some(key);
        self
    }

    /// Sets the API base URL.
    ///
    /// Defaults to [`DEFAULT_API_URL`] when not set. EU-domiciled
    /// accounts typically pass `https://api.eu.mailgun.net`.
    #[must_use]
    pub fn url(mut self, url: ApiUrl) -> Self {
        self.url = Some(url);
        self
    }

    /// Adds a single client-level default header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Sets all client-level default headers at once, replacing any
    /// added so far.
    #[must_use]
    pub fn default_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.default_headers = headers;
        self
    }

    /// Builds the [`MailgunConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `username` or
    /// `key` are not set.
    pub fn build(self) -> Result<MailgunConfig, ConfigError> {
        let username = self.username.ok_or(ConfigError::MissingRequiredField {
            field: "username",
        })?;
        let key = self
            .key
            .ok_or(ConfigError::MissingRequiredField { field: "key" })?;

        let url = match self.url {
            Some(url) => url,
            // DEFAULT_API_URL is a valid literal; this cannot fail.
            None => ApiUrl::new(DEFAULT_API_URL)?,
        };

        Ok(MailgunConfig {
            username,
            key,
            url,
            default_headers: self.default_headers,
        })
    }
}
