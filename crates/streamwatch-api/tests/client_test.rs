#![allow(clippy::unwrap_used)]
// Integration tests for `ApiClient` using wiremock.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use streamwatch_api::types::NewStream;
use streamwatch_api::{ApiClient, Error};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(&server.uri()).unwrap();
    (server, client)
}

// ── Stream tests ────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_streams() {
    let (server, client) = setup().await;

    let envelope = json!({
        "count": 1,
        "streams": [{
            "id": "1f3a",
            "name": "Cam1",
            "source": "0",
            "source_type": "camera",
            "models": ["asset_detection"],
            "active": true,
            "frame_count": 120,
            "uptime": 42.5
        }]
    });

    Mock::given(method("GET"))
        .and(path("/api/streams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let resp = client.list_streams().await.unwrap();

    assert_eq!(resp.count, Some(1));
    assert_eq!(resp.streams.len(), 1);
    let stream = &resp.streams[0];
    assert_eq!(stream.id, "1f3a");
    assert_eq!(stream.name.as_deref(), Some("Cam1"));
    assert_eq!(stream.source_type.as_deref(), Some("camera"));
    assert_eq!(stream.models, vec!["asset_detection"]);
    assert!(stream.active);
    assert_eq!(stream.frame_count, 120);
}

#[tokio::test]
async fn test_list_streams_tolerates_missing_fields() {
    let (server, client) = setup().await;

    // Bare-minimum record: only an id. Everything else defaults.
    let envelope = json!({ "streams": [{ "id": "x" }] });

    Mock::given(method("GET"))
        .and(path("/api/streams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let resp = client.list_streams().await.unwrap();

    assert_eq!(resp.streams.len(), 1);
    assert!(resp.streams[0].name.is_none());
    assert!(resp.streams[0].models.is_empty());
    assert!(!resp.streams[0].active);
}

#[tokio::test]
async fn test_create_stream() {
    let (server, client) = setup().await;

    let body = NewStream {
        name: "Warehouse".into(),
        source: "/data/warehouse.mp4".into(),
        models: vec!["defect_analysis".into()],
    };

    Mock::given(method("POST"))
        .and(path("/api/streams"))
        .and(body_json(json!({
            "name": "Warehouse",
            "source": "/data/warehouse.mp4",
            "models": ["defect_analysis"]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "abc123",
            "message": "Stream added successfully"
        })))
        .mount(&server)
        .await;

    let created = client.create_stream(&body).await.unwrap();

    assert_eq!(created.id, "abc123");
    assert_eq!(created.message.as_deref(), Some("Stream added successfully"));
}

#[tokio::test]
async fn test_delete_stream() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/streams/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Stream removed successfully"
        })))
        .mount(&server)
        .await;

    let ack = client.delete_stream("abc123").await.unwrap();
    assert_eq!(ack.message.as_deref(), Some("Stream removed successfully"));
}

// ── Model tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_attach_model() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/streams/abc123/models"))
        .and(body_json(json!({ "model": "asset_detection" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Model asset_detection added to stream abc123"
        })))
        .mount(&server)
        .await;

    client.attach_model("abc123", "asset_detection").await.unwrap();
}

#[tokio::test]
async fn test_detach_model() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/streams/abc123/models/asset_detection"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Model asset_detection removed from stream abc123"
        })))
        .mount(&server)
        .await;

    client.detach_model("abc123", "asset_detection").await.unwrap();
}

// ── Alert tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_alerts() {
    let (server, client) = setup().await;

    let envelope = json!({
        "count": 2,
        "alerts": [
            {
                "timestamp": "2024-06-15T10:30:00Z",
                "level": "error",
                "message": "Failed to open camera 3",
                "stream_id": "abc123"
            },
            {
                "timestamp": 1718447400,
                "message": "Defect detected",
                "details": { "confidence": 0.93 }
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/api/alerts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let resp = client.list_alerts().await.unwrap();

    assert_eq!(resp.alerts.len(), 2);
    assert_eq!(resp.alerts[0].level.as_deref(), Some("error"));
    assert_eq!(resp.alerts[0].stream_id.as_deref(), Some("abc123"));
    // Second alert omits level — stays None on the wire, defaulted downstream.
    assert!(resp.alerts[1].level.is_none());
    assert!(resp.alerts[1].details.is_some());
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_remote_error_message_extracted() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/streams/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "Stream not found"
        })))
        .mount(&server)
        .await;

    let result = client.delete_stream("nope").await;

    match result {
        Err(Error::Remote { status, ref message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Stream not found");
        }
        other => panic!("expected Remote error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_remote_error_unreadable_body_falls_back() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/streams"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>boom</html>"))
        .mount(&server)
        .await;

    let result = client.list_streams().await;

    match result {
        Err(Error::Remote { status, ref message }) => {
            assert_eq!(status, 500);
            assert!(message.contains("boom"), "got: {message}");
        }
        other => panic!("expected Remote error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_success_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/streams"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = client.list_streams().await;

    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_not_found_helper() {
    let err = Error::Remote {
        status: 404,
        message: "Stream not found".into(),
    };
    assert!(err.is_not_found());

    let err = Error::Remote {
        status: 500,
        message: "boom".into(),
    };
    assert!(!err.is_not_found());
}
