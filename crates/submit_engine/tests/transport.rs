use std::time::Duration;

use pretty_assertions::assert_eq;
use submit_core::{Platform, SubmissionPayload};
use submit_engine::{FailureKind, ReqwestTransport, Transport, TransportSettings};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn payload() -> SubmissionPayload {
    SubmissionPayload {
        video_url: "https://example.com/v/1".to_string(),
        platforms: vec![Platform::Youtube, Platform::Instagram],
        hashtags: "#go #viral".to_string(),
        description: String::new(),
        timestamp: "2024-05-01T12:00:00.000Z".to_string(),
        submission_id: "lw3k9x0000000000abc".to_string(),
    }
}

fn transport_for(server: &MockServer) -> ReqwestTransport {
    ReqwestTransport::new(TransportSettings {
        endpoint: format!("{}/hook", server.uri()),
        ..TransportSettings::default()
    })
}

#[tokio::test]
async fn posts_json_payload_and_accepts_json_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hook"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "videoUrl": "https://example.com/v/1",
            "platforms": ["youtube", "instagram"],
            "hashtags": "#go #viral",
            "description": "",
            "timestamp": "2024-05-01T12:00:00.000Z",
            "submissionId": "lw3k9x0000000000abc",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "queued": 2 })))
        .expect(1)
        .mount(&server)
        .await;

    let receipt = transport_for(&server).send(&payload()).await.expect("send ok");
    assert_eq!(receipt.status, 200);
    assert_eq!(receipt.body, serde_json::json!({ "queued": 2 }));
}

#[tokio::test]
async fn non_json_success_body_counts_as_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hook"))
        .respond_with(ResponseTemplate::new(202).set_body_string("Accepted"))
        .mount(&server)
        .await;

    let receipt = transport_for(&server).send(&payload()).await.expect("send ok");
    assert_eq!(receipt.status, 202);
    assert_eq!(receipt.body, serde_json::json!({ "success": true }));
}

#[tokio::test]
async fn server_error_is_reported_with_status_and_reason() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hook"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = transport_for(&server).send(&payload()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
    assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
}

#[tokio::test]
async fn slow_endpoint_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hook"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(250)))
        .mount(&server)
        .await;

    let transport = ReqwestTransport::new(TransportSettings {
        endpoint: format!("{}/hook", server.uri()),
        request_timeout: Duration::from_millis(50),
        ..TransportSettings::default()
    });
    let err = transport.send(&payload()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_error() {
    // Grab a free port, then close it so nothing is listening.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = format!("http://{}/hook", listener.local_addr().unwrap());
    drop(listener);

    let transport = ReqwestTransport::new(TransportSettings {
        endpoint,
        connect_timeout: Duration::from_millis(500),
        ..TransportSettings::default()
    });
    let err = transport.send(&payload()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
    assert!(!err.to_string().is_empty());
}
