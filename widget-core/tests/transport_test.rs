//! Transport-level behavior: header composition, status mapping, and the
//! multipart/query paths, against a mock backend.

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use widget_core::{
    upload_form, ChatRequest, Endpoint, TenantPlacement, TransportClient, WidgetConfig,
    TENANT_HEADER,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("widget_core=debug")
        .try_init();
}

fn client_for(server: &MockServer) -> TransportClient {
    TransportClient::new(
        WidgetConfig::new(server.uri(), "w1")
            .with_public_key("pk-123")
            .with_tenant_id("acme"),
    )
}

#[tokio::test]
async fn header_placement_sends_both_auth_headers() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat"))
        .and(header("X-Public-Key", "pk-123"))
        .and(header("X-Tenant-Id", "acme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"answer": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let reply: serde_json::Value = client
        .post_json(
            Endpoint::Chat,
            &ChatRequest::new("hi"),
            TenantPlacement::Header,
        )
        .await
        .unwrap();
    assert_eq!(reply["answer"], "ok");
}

#[tokio::test]
async fn body_placement_omits_the_tenant_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"answer": "ok"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut request = ChatRequest::new("hi");
    request.tenant = Some("acme".to_string());
    let _: serde_json::Value = client
        .post_json(Endpoint::Chat, &request, TenantPlacement::Body)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key(TENANT_HEADER));
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["tenant"], "acme");
}

#[tokio::test]
async fn non_2xx_maps_to_backend_error_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .post_json::<_, serde_json::Value>(
            Endpoint::Chat,
            &ChatRequest::new("hi"),
            TenantPlacement::Header,
        )
        .await
        .unwrap_err();
    assert!(err.is_backend());
    assert_eq!(err.status(), Some(502));
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error_without_status() {
    // Port 9 (discard) is not listening; the connection is refused.
    let client = TransportClient::new(WidgetConfig::new("http://127.0.0.1:9", "w1"));
    let err = client
        .post_json::<_, serde_json::Value>(
            Endpoint::Chat,
            &ChatRequest::new("hi"),
            TenantPlacement::Header,
        )
        .await
        .unwrap_err();
    assert!(err.is_network());
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn malformed_2xx_body_is_a_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/tenants/info"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "text/plain"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .get_json::<widget_core::TenantInfo>(Endpoint::TenantInfo, &[])
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        widget_core::WidgetError::MalformedResponse(_)
    ));
}

#[tokio::test]
async fn get_sends_query_pairs_and_auth_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/search"))
        .and(query_param("q", "invoice"))
        .and(query_param("top_k", "5"))
        .and(header("X-Public-Key", "pk-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response: widget_core::SearchResponse = client
        .get_json(
            Endpoint::Search,
            &[("q", "invoice".to_string()), ("top_k", "5".to_string())],
        )
        .await
        .unwrap();
    assert!(response.results.is_empty());
}

#[tokio::test]
async fn multipart_upload_posts_a_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/ingest/upload"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let form = upload_form("notes.pdf", b"%PDF-1.4".to_vec(), Some("cust-7"));
    client
        .post_multipart(Endpoint::IngestUpload, form)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("multipart/form-data"));
}

#[tokio::test]
async fn empty_api_base_fails_before_any_request() {
    let client = TransportClient::new(WidgetConfig::new("", "w1"));
    let err = client
        .post_json::<_, serde_json::Value>(
            Endpoint::Chat,
            &ChatRequest::new("hi"),
            TenantPlacement::Header,
        )
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "No API configured");
}
