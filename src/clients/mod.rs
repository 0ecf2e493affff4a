//! The client layer: dispatcher, per-call types, and outcomes.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`RequestClient`]: the asynchronous request dispatcher
//! - [`Method`]: the closed set of supported HTTP verbs
//! - [`Params`]: an ordered multi-value mapping for queries and bodies
//! - [`QueryOptions`] / [`CommandOptions`]: per-verb-family call options
//! - [`Attachment`] / [`AttachmentData`]: multipart attachment payloads
//! - [`FormFields`]: the field set of a multipart command
//! - [`ApiResponse`]: the normalized success outcome
//! - [`ApiError`]: the single dispatch error kind
//!
//! # Example
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
//! let response = client
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

mod attachment;
mod errors;
mod form;
mod options;
mod request;
mod response;
mod url;

pub use attachment::{Attachment, AttachmentData};
pub use errors::ApiError;
pub use form::FormFields;
pub use options::{CommandOptions, Method, Params, QueryOptions};
pub use request::RequestClient;
pub use response::ApiResponse;
