//! Per-call request types for the Mailgun client.
//!
//! This module provides the typed per-call surface of the dispatcher:
//! the [`Method`] enum, the [`Params`] multi-value mapping used for both
//! query strings and URL-encoded bodies, and the per-verb-family option
//! types [`QueryOptions`] and [`CommandOptions`].

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

/// HTTP methods supported by the Mailgun API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP HEAD method for header-only retrieval.
    Head,
    /// HTTP OPTIONS method for capability discovery.
    Options,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for replacing resources.
    Put,
    /// HTTP PATCH method for partial updates.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Head => write!(f, "head"),
            Self::Options => write!(f, "options"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Patch => write!(f, "patch"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Head => Self::HEAD,
            Method::Options => Self::OPTIONS,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Patch => Self::PATCH,
            Method::Delete => Self::DELETE,
        }
    }
}

/// An ordered, multi-value parameter mapping.
///
/// Used for both URL query strings and URL-encoded request bodies. Keys
/// may repeat — `param` appends a single pair, `params` appends one pair
/// per value — and insertion order is preserved on the wire.
///
/// # Example
///
/// ```rust
/// use mailgun_api::Params;
///
/// let params = Params::new()
///     .param("from", "sender@example.com")
///     .params("to", ["a@example.com", "b@example.com"]);
///
/// assert_eq!(params.pairs().len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    /// Creates an empty parameter mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single key/value pair.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    /// Appends one pair per value under the same key.
    #[must_use]
    pub fn params<I, V>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let key = key.into();
        for value in values {
            self.pairs.push((key.clone(), value.into()));
        }
        self
    }

    /// Returns `true` if no pairs have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the pairs in insertion order.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Encodes the pairs as an `application/x-www-form-urlencoded` body.
    pub(crate) fn to_urlencoded(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Per-call options for the query-bearing verbs (GET, HEAD, OPTIONS).
///
/// Headers set here form the highest-precedence tier of the header
/// merge and may override anything, including `Authorization`. The
/// optional timeout is forwarded to the transport; when unset, the
/// transport's own policy applies.
#[derive(Clone, Debug, Default)]
pub struct QueryOptions {
    /// Per-call headers, overriding client defaults key-by-key.
    pub headers: HashMap<String, String>,
    /// Optional per-call deadline forwarded to the transport.
    pub timeout: Option<Duration>,
}

impl QueryOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single per-call header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets the per-call timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Per-call options for the body-bearing verbs (POST, PUT, PATCH, DELETE).
///
/// The dispatcher attaches `Content-Type: application/x-www-form-urlencoded`
/// as a call-level default below these headers, so setting `Content-Type`
/// here overrides the body encoding advertised to the server.
#[derive(Clone, Debug, Default)]
pub struct CommandOptions {
    /// Per-call headers, overriding client defaults key-by-key.
    pub headers: HashMap<String, String>,
    /// Optional per-call deadline forwarded to the transport.
    pub timeout: Option<Duration>,
}

impl CommandOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single per-call header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets the per-call timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
