//! Integration tests for multipart dispatch.
//!
//! Multipart bodies carry a random boundary, so these tests inspect the
//! raw recorded request instead of using body matchers.

use serde_json::json;

use mailgun_api::{
    ApiKey, ApiUrl, Attachment, FormFields, MailgunConfig, RequestClient, Username,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointed at the given mock server.
fn create_test_client(server: &MockServer) -> RequestClient {
    let config = MailgunConfig::builder()
        .username(Username::new("api").unwrap())
        .key(ApiKey::new("key-1234").unwrap())
        .url(ApiUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    RequestClient::new(config)
}

/// Mounts a queued-message response for POST on the given path.
async fn mount_accepting_mock(server: &MockServer, route: &str) {
    Mock::given(method("POST"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Queued. Thank you."})),
        )
        .expect(1)
        .mount(server)
        .await;
}

/// Returns the raw body of the single recorded request.
async fn recorded_body(server: &MockServer) -> String {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    String::from_utf8_lossy(&requests[0].body).into_owned()
}

/// Returns the content-type header of the single recorded request.
async fn recorded_content_type(server: &MockServer) -> String {
    let requests = server.received_requests().await.unwrap();
    requests[0]
        .headers
        .iter()
        .find(|(name, _)| name.as_str() == "content-type")
        .map(|(_, values)| values.last().as_str().to_string())
        .expect("request carried no content-type header")
}

#[tokio::test]
async fn test_attachments_expand_into_ordered_parts() {
    let server = MockServer::start().await;
    mount_accepting_mock(&server, "/v3/example.com/messages").await;

    let client = create_test_client(&server);
    let fields = FormFields::new()
        .field("from", "sender@example.com")
        .attachment(Attachment::bytes(b"png-bytes".to_vec()).filename("a.png"))
        .attachment(Attachment::bytes(b"raw-bytes".to_vec()));

    client
        .post_multi("/v3/example.com/messages", fields)
        .await
        .unwrap();

    let body = recorded_body(&server).await;
    let named = body
        .find(r#"name="attachment"; filename="a.png""#)
        .expect("explicit filename part missing");
    let defaulted = body
        .find(r#"name="attachment"; filename="file""#)
        .expect("defaulted filename part missing");
    assert!(named < defaulted, "attachment order was not preserved");
}

#[tokio::test]
async fn test_empty_fields_are_excluded_from_the_body() {
    let server = MockServer::start().await;
    mount_accepting_mock(&server, "/v3/example.com/messages").await;

    let client = create_test_client(&server);
    let fields = FormFields::new()
        .field("from", "sender@example.com")
        .field("o:testmode", "")
        .field("subject", "hello");

    client
        .post_multi("/v3/example.com/messages", fields)
        .await
        .unwrap();

    let body = recorded_body(&server).await;
    assert!(body.contains(r#"name="from""#));
    assert!(body.contains(r#"name="subject""#));
    assert!(!body.contains("o:testmode"));
}

#[tokio::test]
async fn test_repeated_fields_produce_one_part_per_element() {
    let server = MockServer::start().await;
    mount_accepting_mock(&server, "/v3/example.com/messages").await;

    let client = create_test_client(&server);
    let fields = FormFields::new()
        .field("from", "sender@example.com")
        .field_values("to", ["a@example.com", "b@example.com"]);

    client
        .post_multi("/v3/example.com/messages", fields)
        .await
        .unwrap();

    let body = recorded_body(&server).await;
    assert_eq!(body.matches(r#"name="to""#).count(), 2);
    assert!(body.contains("a@example.com"));
    assert!(body.contains("b@example.com"));
}

#[tokio::test]
async fn test_multipart_content_type_carries_the_encoder_boundary() {
    let server = MockServer::start().await;
    mount_accepting_mock(&server, "/v3/example.com/messages").await;

    // A client-level Content-Type must not survive into a multipart
    // request; the encoder supplies the boundary-bearing value.
    let config = MailgunConfig::builder()
        .username(Username::new("api").unwrap())
        .key(ApiKey::new("key-1234").unwrap())
        .url(ApiUrl::new(server.uri()).unwrap())
        .header("Content-Type", "application/json")
        .build()
        .unwrap();
    let client = RequestClient::new(config);

    let fields = FormFields::new().field("from", "sender@example.com");
    client
        .post_multi("/v3/example.com/messages", fields)
        .await
        .unwrap();

    let content_type = recorded_content_type(&server).await;
    assert!(
        content_type.starts_with("multipart/form-data; boundary="),
        "unexpected content type: {content_type}"
    );
}

#[tokio::test]
async fn test_attachment_content_type_reaches_its_part() {
    let server = MockServer::start().await;
    mount_accepting_mock(&server, "/v3/example.com/messages").await;

    let client = create_test_client(&server);
    let fields = FormFields::new()
        .field("from", "sender@example.com")
        .attachment(
            Attachment::bytes(b"png-bytes".to_vec())
                .filename("logo.png")
                .content_type("image/png"),
        );

    client
        .post_multi("/v3/example.com/messages", fields)
        .await
        .unwrap();

    let body = recorded_body(&server).await;
    assert!(body.contains(r#"filename="logo.png""#));
    assert!(body.contains("image/png"));
}

#[tokio::test]
async fn test_stream_attachment_is_sent_without_synthesized_filename() {
    let server = MockServer::start().await;
    mount_accepting_mock(&server, "/v3/example.com/messages").await;

    let client = create_test_client(&server);
    let stream =
        futures_util::stream::iter(vec![Ok::<_, std::io::Error>(b"streamed-bytes".to_vec())]);
    let fields = FormFields::new()
        .field("from", "sender@example.com")
        .attachment(Attachment::stream(reqwest::Body::wrap_stream(stream)).known_length(14));

    client
        .post_multi("/v3/example.com/messages", fields)
        .await
        .unwrap();

    let body = recorded_body(&server).await;
    assert!(body.contains(r#"name="attachment""#));
    assert!(body.contains("streamed-bytes"));
    assert!(!body.contains("filename="));
}

#[tokio::test]
async fn test_post_multi_resolves_with_parsed_body() {
    let server = MockServer::start().await;
    mount_accepting_mock(&server, "/v3/example.com/messages").await;

    let client = create_test_client(&server);
    let fields = FormFields::new()
        .field("from", "sender@example.com")
        .field("to", "recipient@example.com")
        .field("subject", "hello")
        .field("text", "body text");

    let response = client
        .post_multi("/v3/example.com/messages", fields)
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body["message"], json!("Queued. Thank you."));
}
