//! Appointment controller behavior: the yes/no booking answer and the
//! tenant-info driven service list.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use widget_core::{AppointmentWidget, Role, Transcript, TransportClient, WidgetConfig};

fn widget(server: &MockServer) -> AppointmentWidget<Transcript> {
    let config = WidgetConfig::new(server.uri(), "appt-widget").with_tenant_id("acme");
    AppointmentWidget::new(TransportClient::new(config), Transcript::new())
}

#[tokio::test]
async fn accepted_booking_renders_booked() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/appointments"))
        .and(body_json(json!({"name": "Ada", "phone": "+1555"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let mut appt = widget(&server);
    appt.submit("Ada", "+1555").await;

    let entries = appt.target().entries();
    assert_eq!(entries[0], (Role::User, "Ada, +1555".to_string()));
    assert_eq!(entries[1], (Role::System, "Booked".to_string()));
}

#[tokio::test]
async fn refused_booking_renders_failed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/appointments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": false})))
        .mount(&server)
        .await;

    let mut appt = widget(&server);
    appt.submit("Ada", "+1555").await;

    let entries = appt.target().entries();
    assert_eq!(entries[1], (Role::System, "Failed".to_string()));
}

#[tokio::test]
async fn blank_fields_make_no_request() {
    let server = MockServer::start().await;
    let mut appt = widget(&server);
    appt.submit("", "+1555").await;
    appt.submit("Ada", "   ").await;

    assert!(appt.target().is_empty());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn unreachable_backend_degrades_to_booking_unavailable() {
    let config = WidgetConfig::new("http://127.0.0.1:9", "appt-widget");
    let mut appt = AppointmentWidget::new(TransportClient::new(config), Transcript::new());
    appt.submit("Ada", "+1555").await;

    let entries = appt.target().entries();
    assert_eq!(entries[1], (Role::System, "Booking unavailable".to_string()));
}

#[tokio::test]
async fn customer_id_travels_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/appointments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let config = WidgetConfig::new(server.uri(), "appt-widget");
    let mut appt = AppointmentWidget::new(TransportClient::new(config), Transcript::new())
        .with_customer_id("cust-7");
    appt.submit("Ada", "+1555").await;

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["customer_id"], "cust-7");
}

#[tokio::test]
async fn load_services_renders_services_and_booking_link() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/tenants/info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "services": [
                {"name": "Cleaning", "url": "https://book.example/cleaning"},
                {"name": "Walk-in"}
            ],
            "booking_url": "https://book.example",
            "numbers": []
        })))
        .mount(&server)
        .await;

    let mut appt = widget(&server);
    let info = appt.load_services().await.unwrap();
    assert_eq!(info.services.len(), 2);
    assert_eq!(info.booking_url.as_deref(), Some("https://book.example"));

    let lines: Vec<&str> = appt
        .target()
        .entries()
        .iter()
        .map(|(_, text)| text.as_str())
        .collect();
    assert_eq!(
        lines,
        vec![
            "Cleaning: https://book.example/cleaning",
            "Walk-in",
            "Book online: https://book.example",
        ]
    );
}

#[tokio::test]
async fn load_services_failure_renders_one_line_and_returns_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/tenants/info"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut appt = widget(&server);
    assert!(appt.load_services().await.is_none());
    let entries = appt.target().entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0], (Role::System, "Error: 404".to_string()));
}
