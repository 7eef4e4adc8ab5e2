//! Relay endpoint tests.
//!
//! These run against an in-process router; no real Telegram credentials are
//! needed. Upstream failure is simulated by pointing the API base at an
//! unreachable local port.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;

use els_relay_backend::services::telegram::{TelegramConfig, TelegramService};
use els_relay_backend::{app, AppState};

fn server_with(telegram: TelegramService) -> TestServer {
    TestServer::new(app(AppState { telegram })).unwrap()
}

fn completed_payload() -> serde_json::Value {
    json!({
        "percentage": 70,
        "total": 10,
        "status": "Completed",
        "extraDetails": "",
        "isGrandTest": false,
        "selectedTestSize": 50,
        "unit": { "id": 3, "title": "Palm Trees" },
        "studentData": { "name": "Aziza", "surname": "Karimova", "group": "G-12" },
        "score": { "correct": 7, "wrong": 3 }
    })
}

#[tokio::test]
async fn health_check_works() {
    let server = server_with(TelegramService::new(None));
    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("OK");
}

/// Missing credentials are a soft no-op: success-shaped response, nothing
/// delivered.
#[tokio::test]
async fn send_result_without_credentials_is_soft_noop() {
    let server = server_with(TelegramService::new(None));

    let response = server
        .post("/api/send-result")
        .json(&completed_payload())
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["ok"], false);
    assert_eq!(body["error"], "Telegram not configured");
}

/// Non-POST methods get a client error with a JSON body, not a bare 405.
#[tokio::test]
async fn get_is_method_not_allowed() {
    let server = server_with(TelegramService::new(None));

    let response = server.get("/api/send-result").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["ok"], false);
    assert_eq!(body["error"], "Method not allowed");
}

/// Upstream delivery failure becomes a non-2xx JSON error.
#[tokio::test]
async fn unreachable_upstream_returns_bad_gateway() {
    let config = TelegramConfig {
        bot_token: "test-token".to_string(),
        chat_id: "42".to_string(),
        // Discard port; the connection attempt fails immediately.
        api_base: "http://127.0.0.1:9".to_string(),
    };
    let server = server_with(TelegramService::new(Some(config)));

    let response = server
        .post("/api/send-result")
        .json(&completed_payload())
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = response.json();
    assert_eq!(body["ok"], false);
    assert_eq!(body["error"], "Telegram request failed");
}

#[tokio::test]
async fn malformed_payload_is_a_client_error() {
    let server = server_with(TelegramService::new(None));

    let response = server
        .post("/api/send-result")
        .json(&json!({ "nonsense": true }))
        .await;

    assert!(
        response.status_code().is_client_error(),
        "got {}",
        response.status_code()
    );
}

#[tokio::test]
async fn incomplete_payload_is_accepted() {
    let server = server_with(TelegramService::new(None));

    let response = server
        .post("/api/send-result")
        .json(&json!({
            "percentage": 30,
            "total": 10,
            "status": "Incomplete",
            "extraDetails": "Answered: 4/10\n✅ Correct: 3\n❌ Wrong: 1\nNote: Browser closed during exercise",
            "isGrandTest": true,
            "selectedTestSize": 50,
            "unit": null,
            "studentData": { "name": "Aziza", "surname": "Karimova", "group": "G-12" },
            "score": { "correct": 3, "wrong": 1 }
        }))
        .await;

    response.assert_status_ok();
}
