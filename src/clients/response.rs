//! The dispatch success type.

use serde::de::DeserializeOwned;

/// A successful API response.
///
/// Returned by every dispatch method when the status code is in the
/// 2xx range. The `body` holds the parsed JSON payload;
/// [`Value::Null`](serde_json::Value::Null) when the response body was
/// empty or not valid JSON.
///
/// # Example
///
/// ```rust
/// use mailgun_api::ApiResponse;
/// use serde_json::json;
///
/// let response = ApiResponse {
///     body: json!({"items": []}),
///     status: 200,
/// };
///
/// assert_eq!(response.status, 200);
/// assert!(response.body["items"].is_array());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    /// The parsed JSON response body.
    pub body: serde_json::Value,
    /// The HTTP status code.
    pub status: u16,
}

impl ApiResponse {
    /// Deserializes the response body into a caller-chosen type.
    ///
    /// Resource wrappers reshape raw JSON into domain types through
    /// this method.
    ///
    /// # Errors
    ///
    /// Returns the underlying deserialization error when the body does
    /// not match `T`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mailgun_api::ApiResponse;
    /// use serde::Deserialize;
    /// use serde_json::json;
    ///
    /// #[derive(Deserialize)]
    /// struct MessageReceipt {
    ///     id: String,
    ///     message: String,
    /// }
    ///
    /// let response = ApiResponse {
    ///     body: json!({"id": "<123@example.com>", "message": "Queued. Thank you."}),
    ///     status: 200,
    /// };
    ///
    /// let receipt: MessageReceipt = response.json().unwrap();
    /// assert_eq!(receipt.message, "Queued. Thank you.");
    /// ```
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.body.clone())
    }
}

/// Parses a response body as JSON, leniently.
///
/// An empty or malformed body yields `Value::Null` rather than a
/// secondary error kind; the status code alone decides whether the
/// dispatch succeeded.
pub(crate) fn parse_body(text: &str) -> serde_json::Value {
    if text.is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(text).unwrap_or(serde_json::Value::Null)
}
