//! Error types for client configuration.
//!
//! This module contains the validation errors produced while building a
//! [`MailgunConfig`](crate::MailgunConfig). Configuration errors are a
//! construction-time concern only; once a client exists, every dispatch
//! failure is reported as an [`ApiError`](crate::ApiError).
//!
//! # Example
//!
//! ```rust
//! use mailgun_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while validating client configuration.
///
/// Each variant carries enough context to produce a clear, actionable
/// message for the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Username cannot be empty.
    #[error("Username cannot be empty. Mailgun expects the literal user 'api' for API key auth.")]
    EmptyUsername,

    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Mailgun API key.")]
    EmptyApiKey,

    /// Base URL is invalid.
    #[error("Invalid API base URL '{url}'. Please provide a URL with scheme and host (e.g. 'https://api.mailgun.net').")]
    InvalidApiUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
