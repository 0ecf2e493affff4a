//! The request dispatcher.
//!
//! This module provides [`RequestClient`], the component that turns a
//! logical operation (verb, path, query, body, headers) into exactly one
//! outbound HTTP call and normalizes the raw response into an
//! [`ApiResponse`] or an [`ApiError`].

use std::time::Duration;

use base64::prelude::*;

use crate::clients::errors::ApiError;
use crate::clients::form::FormFields;
use crate::clients::options::{CommandOptions, Method, Params, QueryOptions};
use crate::clients::response::{self, ApiResponse};
use crate::clients::url;
use crate::config::MailgunConfig;

/// The request body of a single dispatch.
#[derive(Debug)]
enum Payload {
    Empty,
    UrlEncoded(Params),
    Multipart(FormFields),
}

/// Asynchronous dispatcher for the Mailgun API.
///
/// The client handles:
/// - Basic-auth `Authorization` header computation from `username:key`
/// - Three-tier header merging (auth < client defaults < per-call)
/// - Base URL and path joining with normalized slash handling
/// - URL-encoded and multipart body encoding
/// - Uniform success/error discrimination on the response status
///
/// Every entry point performs exactly one outbound exchange: there is no
/// retry, rate limiting, pooling policy, or response streaming. A call
/// either fully succeeds with a parsed 2xx body or fully fails with an
/// [`ApiError`].
///
/// # Thread Safety
///
/// `RequestClient` is `Send + Sync`; concurrent calls share only the
/// immutable configuration.
///
/// # Example
///
/// ```rust,ignore
/// use mailgun_api::{MailgunConfig, Username, ApiKey, Params, RequestClient};
///
/// let config = MailgunConfig::builder()
///     .username(Username::new("api").unwrap())
///     .key(ApiKey::new("key-1234").unwrap())
///     .build()
///     .unwrap();
///
/// let client = RequestClient::new(config);
///
/// let domains = client
///     .get("/v3/domains", Some(Params::new().param("limit", "10")), None)
///     .await?;
/// println!("{}", domains.body);
/// ```
#[derive(Debug)]
pub struct RequestClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Immutable client configuration.
    config: MailgunConfig,
}

// Verify RequestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RequestClient>();
};

impl RequestClient {
    /// Creates a new dispatcher for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This
    /// should only happen in extremely unusual circumstances (e.g. TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: MailgunConfig) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &MailgunConfig {
        &self.config
    }

    /// Sends a GET request.
    ///
    /// Query parameters are attached only when `query` contains at
    /// least one pair; an empty mapping never produces a query string.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for any non-2xx response or transport failure.
    pub async fn get(
        &self,
        path: &str,
        query: Option<Params>,
        options: Option<QueryOptions>,
    ) -> Result<ApiResponse, ApiError> {
        self.query_request(Method::Get, path, query, options).await
    }

    /// Sends a HEAD request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for any non-2xx response or transport failure.
    pub async fn head(
        &self,
        path: &str,
        query: Option<Params>,
        options: Option<QueryOptions>,
    ) -> Result<ApiResponse, ApiError> {
        self.query_request(Method::Head, path, query, options).await
    }

    /// Sends an OPTIONS request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for any non-2xx response or transport failure.
    pub async fn options(
        &self,
        path: &str,
        query: Option<Params>,
        options: Option<QueryOptions>,
    ) -> Result<ApiResponse, ApiError> {
        self.query_request(Method::Options, path, query, options)
            .await
    }

    /// Sends a POST request with a URL-encoded body.
    ///
    /// The body is sent as `application/x-www-form-urlencoded` unless
    /// the per-call headers override `Content-Type`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for any non-2xx response or transport failure.
    pub async fn post(
        &self,
        path: &str,
        body: Option<Params>,
        options: Option<CommandOptions>,
    ) -> Result<ApiResponse, ApiError> {
        self.command(Method::Post, path, body, options).await
    }

    /// Sends a PUT request with a URL-encoded body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for any non-2xx response or transport failure.
    pub async fn put(
        &self,
        path: &str,
        body: Option<Params>,
        options: Option<CommandOptions>,
    ) -> Result<ApiResponse, ApiError> {
        self.command(Method::Put, path, body, options).await
    }

    /// Sends a PATCH request with a URL-encoded body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for any non-2xx response or transport failure.
    pub async fn patch(
        &self,
        path: &str,
        body: Option<Params>,
        options: Option<CommandOptions>,
    ) -> Result<ApiResponse, ApiError> {
        self.command(Method::Patch, path, body, options).await
    }

    /// Sends a DELETE request with an optional URL-encoded body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for any non-2xx response or transport failure.
    pub async fn delete(
        &self,
        path: &str,
        body: Option<Params>,
        options: Option<CommandOptions>,
    ) -> Result<ApiResponse, ApiError> {
        self.command(Method::Delete, path, body, options).await
    }

    /// Sends a POST request with a `multipart/form-data` body.
    ///
    /// Text fields with empty values are excluded, repeated values
    /// produce one part per element, and each attachment becomes one
    /// ordered part named `attachment`. The merged `Content-Type`
    /// header is cleared so the multipart encoder supplies the boundary.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for any non-2xx response, transport
    /// failure, or malformed attachment content type.
    pub async fn post_multi(
        &self,
        path: &str,
        fields: FormFields,
    ) -> Result<ApiResponse, ApiError> {
        self.dispatch(
            Method::Post,
            path,
            None,
            Payload::Multipart(fields),
            &[],
            None,
        )
        .await
    }

    /// Shared entry for the query-bearing verbs.
    async fn query_request(
        &self,
        method: Method,
        path: &str,
        query: Option<Params>,
        options: Option<QueryOptions>,
    ) -> Result<ApiResponse, ApiError> {
        let options = options.unwrap_or_default();
        let call_headers: Vec<(String, String)> = options.headers.into_iter().collect();

        self.dispatch(
            method,
            path,
            query,
            Payload::Empty,
            &call_headers,
            options.timeout,
        )
        .await
    }

    /// Shared entry for the body-bearing verbs.
    ///
    /// The urlencoded `Content-Type` sits below the caller's explicit
    /// headers, so per-call options may override the body encoding
    /// advertised to the server.
    async fn command(
        &self,
        method: Method,
        path: &str,
        body: Option<Params>,
        options: Option<CommandOptions>,
    ) -> Result<ApiResponse, ApiError> {
        let options = options.unwrap_or_default();

        let mut call_headers = vec![(
            "Content-Type".to_string(),
            "application/x-www-form-urlencoded".to_string(),
        )];
        for (key, value) in &options.headers {
            set_header(&mut call_headers, key, value);
        }

        let payload = body.map_or(Payload::Empty, Payload::UrlEncoded);

        self.dispatch(method, path, None, payload, &call_headers, options.timeout)
            .await
    }

    /// Performs one outbound exchange and normalizes its outcome.
    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        query: Option<Params>,
        payload: Payload,
        call_headers: &[(String, String)],
        timeout: Option<Duration>,
    ) -> Result<ApiResponse, ApiError> {
        let target = url::join(self.config.url().as_ref(), path);

        let mut headers = self.merged_headers(call_headers);
        if matches!(payload, Payload::Multipart(_)) {
            // The multipart encoder owns the boundary-bearing Content-Type.
            headers.retain(|(key, _)| !key.eq_ignore_ascii_case("content-type"));
        }

        let mut builder = self.client.request(method.into(), &target);
        for (key, value) in &headers {
            builder = builder.header(key, value);
        }

        if let Some(query) = &query {
            if !query.is_empty() {
                builder = builder.query(query.pairs());
            }
        }

        builder = match payload {
            Payload::Empty => builder,
            Payload::UrlEncoded(body) => builder.body(body.to_urlencoded()),
            Payload::Multipart(fields) => builder.multipart(fields.into_form()?),
        };

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        tracing::debug!("Sending {} request to {}", method, target);

        let response = builder.send().await?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let text = response.text().await.unwrap_or_default();
        let body = response::parse_body(&text);

        if !status.is_success() {
            return Err(ApiError {
                status: status.as_u16(),
                status_text,
                body,
            });
        }

        Ok(ApiResponse {
            body,
            status: status.as_u16(),
        })
    }

    /// Merges the three header tiers key-by-key, case-insensitively.
    ///
    /// Precedence, lowest to highest: the computed Basic `Authorization`
    /// header, the client-level default headers, the per-call headers.
    /// A higher tier may override any key, including `Authorization`.
    fn merged_headers(&self, call_headers: &[(String, String)]) -> Vec<(String, String)> {
        let mut headers = vec![("Authorization".to_string(), self.basic_authorization())];

        for (key, value) in self.config.default_headers() {
            set_header(&mut headers, key, value);
        }
        for (key, value) in call_headers {
            set_header(&mut headers, key, value);
        }

        headers
    }

    /// Computes the Basic credential from `username:key`.
    fn basic_authorization(&self) -> String {
        let credentials = format!(
            "{}:{}",
            self.config.username().as_ref(),
            self.config.key().as_ref()
        );
        format!("Basic {}", BASE64_STANDARD.encode(credentials.as_bytes()))
    }
}

/// Sets a header in an ordered list, replacing any case-insensitive match.
fn set_header(headers: &mut Vec<(String, String)>, key: &str, value: &str) {
    if let Some(slot) = headers
        .iter_mut()
        .find(|(existing, _)| existing.eq_ignore_ascii_case(key))
    {
        slot.1 = value.to_string();
    } else {
        headers.push((key.to_string(), value.to_string()));
    }
}
