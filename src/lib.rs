//! # Mailgun API Rust client
//!
//! A Rust client for the Mailgun API, providing validated configuration
//! and a typed, asynchronous request dispatcher over the provider's
//! HTTP surface.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`MailgunConfig`] and [`MailgunConfigBuilder`]
//! - Validated newtypes for credentials and the API base URL
//! - An async dispatcher ([`RequestClient`]) with Basic authentication,
//!   documented header precedence, and normalized URL joining
//! - URL-encoded command bodies and `multipart/form-data` assembly for
//!   attachments
//! - Uniform success/error normalization into [`ApiResponse`] and [`ApiError`]
//!
//! Resource wrappers (domains, messages, mailing lists, ...) are built
//! on top of the eight dispatcher entry points; the dispatcher itself
//! never retries, paginates, or caches.
//!
//! ## Quick Start
//!
//! ```rust
//! use mailgun_api::{MailgunConfig, Username, ApiKey};
//!
//! let config = MailgunConfig::builder()
//!     .username(Username::new("api").unwrap())
//!     .key(ApiKey::new("key-1234").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use mailgun_api::{MailgunConfig, Username, ApiKey, Params, RequestClient};
//!
//! let config = MailgunConfig::builder()
//!     .username(Username::new("api").unwrap())
//!     .key(ApiKey::new("key-1234").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = RequestClient::new(config);
//!
//! // List domains
//! let domains = client
//!     .get("/v3/domains", Some(Params::new().param("limit", "10")), None)
//!     .await?;
//!
//! // Send a message
//! let receipt = client
//!     .post(
//!         "/v3/example.com/messages",
//!         Some(Params::new()
//!             .param("from", "sender@example.com")
//!             .param("to", "recipient@example.com")
//!             .param("subject", "Hello")
//!             .param("text", "Testing.")),
//!         None,
//!     )
//!     .await?;
//! ```
//!
//! ## Sending Attachments
//!
//! ```rust,ignore
//! use mailgun_api::{Attachment, FormFields};
//!
//! let fields = FormFields::new()
//!     .field("from", "sender@example.com")
//!     .field("to", "recipient@example.com")
//!     .field("subject", "Report attached")
//!     .attachment(Attachment::bytes(pdf_bytes).filename("report.pdf"));
//!
//! let receipt = client.post_multi("/v3/example.com/messages", fields).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: newtypes and the builder validate on construction
//! - **Thread-safe**: client and configuration are `Send + Sync`
//! - **Single-shot dispatch**: one outbound exchange per call, no retries
//! - **One failure shape**: every failed dispatch is an [`ApiError`]

pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, ApiUrl, MailgunConfig, MailgunConfigBuilder, Username, DEFAULT_API_URL};
pub use error::ConfigError;

// Re-export client types
pub use clients::{
    ApiError, ApiResponse, Attachment, AttachmentData, CommandOptions, FormFields, Method, Params,
    QueryOptions, RequestClient,
};
