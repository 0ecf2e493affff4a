//! The dispatch error type.
//!
//! Every failed dispatch — a non-2xx response or a transport-level
//! failure — is reported as an [`ApiError`]. There are no separate
//! network, timeout, or validation error kinds: callers inspect
//! `status` and `body` to decide on user-facing messaging.

use thiserror::Error;

/// Error returned when a dispatch does not produce a 2xx response.
///
/// Carries the three observed fields and nothing else: no retry,
/// backoff, or classification logic is attached. The `body` holds the
/// parsed JSON error payload when the server sent one;
/// [`Value::Null`](serde_json::Value::Null) when the body was absent or
/// not valid JSON.
///
/// Transport-level failures (connection refused, per-call timeout, an
/// invalid header reaching the wire layer) are reported through the
/// same type with `status: 0`, since no HTTP status was observed.
///
/// # Example
///
/// ```rust
/// use mailgun_api::ApiError;
/// use serde_json::json;
///
/// let error = ApiError {
///     status: 401,
///     status_text: "Unauthorized".to_string(),
///     body: json!({"message": "Unauthorized"}),
/// };
///
/// assert_eq!(error.to_string(), "Unauthorized (status: 401)");
/// ```
#[derive(Debug, Error)]
#[error("{status_text} (status: {status})")]
pub struct ApiError {
    /// The HTTP status code of the response, or 0 when no response was
    /// observed.
    pub status: u16,
    /// The status line reason phrase, or the transport's description of
    /// the failure.
    pub status_text: String,
    /// The parsed JSON error body; `Null` when absent or unparseable.
    pub body: serde_json::Value,
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            status: err.status().map_or(0, |status| status.as_u16()),
            status_text: err.to_string(),
            body: serde_json::Value::Null,
        }
    }
}
