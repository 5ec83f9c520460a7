// Relay dispatch tests - forwarding payloads to HTTP agents
//
// Each test runs a recording agent in-process and drives DispatchRelay directly.

#[path = "../support/mod.rs"]
mod support;

use agent_relay_core::directory::AgentDirectory;
use agent_relay_core::relay::{DispatchRelay, DispatchRequest, RelayError};
use axum::http::StatusCode;
use serde_json::json;
use support::{RecordingAgent, agent, closed_addr, spawn};

const STORY: &str = "{\"response\": \"Once upon a time, a robot danced.\"}";

async fn relay_to(downstream: &RecordingAgent) -> DispatchRelay {
    let addr = spawn(downstream.router("/writer_agent")).await;
    let directory = AgentDirectory::new(vec![agent(
        "writer_agent",
        format!("http://{addr}/writer_agent"),
    )])
    .expect("directory");
    DispatchRelay::new(directory)
}

// ============================================================================
// Success path
// ============================================================================

#[tokio::test]
async fn forwards_payload_and_returns_raw_body() {
    let downstream = RecordingAgent::replying(STORY);
    let relay = relay_to(&downstream).await;

    let body = relay
        .execute_agent("writer_agent", r#"{ "input" : "a robot learns to dance" }"#)
        .await
        .expect("dispatch");

    assert_eq!(body, STORY);
    assert_eq!(
        downstream.bodies().await,
        vec![json!({"input": "a robot learns to dance"})]
    );
}

#[tokio::test]
async fn payload_text_reaches_agent_unchanged() {
    let downstream = RecordingAgent::replying(STORY);
    let relay = relay_to(&downstream).await;
    let payload = r#"{"input":"x","n":12345678901234567890123,"z":1,"a":2}"#;

    relay
        .execute_agent("writer_agent", payload)
        .await
        .expect("dispatch");

    let calls = downstream.calls().await;
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].body, payload);
    assert_eq!(calls[0].content_type.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn dispatch_request_goes_through_same_path() {
    let downstream = RecordingAgent::replying(STORY);
    let relay = relay_to(&downstream).await;

    let body = relay
        .dispatch(DispatchRequest {
            id: "writer_agent".to_string(),
            payload: r#"{"input": "robots"}"#.to_string(),
        })
        .await
        .expect("dispatch");

    assert_eq!(body, STORY);
    assert_eq!(downstream.bodies().await.len(), 1);
}

// ============================================================================
// Failure kinds
// ============================================================================

#[tokio::test]
async fn unknown_agent_makes_no_request() {
    let downstream = RecordingAgent::replying(STORY);
    let relay = relay_to(&downstream).await;

    let err = relay
        .execute_agent("poet_agent", r#"{"input": "x"}"#)
        .await
        .expect_err("unknown agent");

    assert!(matches!(err, RelayError::AgentNotFound { ref id } if id == "poet_agent"));
    assert_eq!(err.to_string(), "Agent not found");
    assert!(downstream.bodies().await.is_empty());
}

#[tokio::test]
async fn invalid_payload_makes_no_request() {
    let downstream = RecordingAgent::replying(STORY);
    let relay = relay_to(&downstream).await;

    let err = relay
        .execute_agent("writer_agent", "not json")
        .await
        .expect_err("invalid payload");

    assert_eq!(err.to_string(), "Invalid JSON payload");
    assert_eq!(err.kind(), "bad_payload");
    assert!(downstream.bodies().await.is_empty());
}

#[tokio::test]
async fn unknown_agent_wins_over_invalid_payload() {
    let downstream = RecordingAgent::replying(STORY);
    let relay = relay_to(&downstream).await;

    let err = relay
        .execute_agent("poet_agent", "not json")
        .await
        .expect_err("unknown agent");

    assert_eq!(err.kind(), "not_found");
}

#[tokio::test]
async fn unreachable_agent_is_transport_error() {
    let addr = closed_addr().await;
    let directory = AgentDirectory::new(vec![agent(
        "writer_agent",
        format!("http://{addr}/writer_agent"),
    )])
    .expect("directory");
    let relay = DispatchRelay::new(directory);

    let err = relay
        .execute_agent("writer_agent", r#"{"input": "x"}"#)
        .await
        .expect_err("connection refused");

    assert_eq!(err.kind(), "transport");
    assert!(err.to_string().starts_with("Error executing agent:"));
}

#[tokio::test]
async fn error_status_is_transport_error() {
    let downstream = RecordingAgent::with_status(
        StatusCode::INTERNAL_SERVER_ERROR,
        "{\"error\": \"model unavailable\"}",
    );
    let relay = relay_to(&downstream).await;

    let err = relay
        .execute_agent("writer_agent", r#"{"input": "x"}"#)
        .await
        .expect_err("500 from agent");

    assert!(matches!(err, RelayError::Transport { ref agent, .. } if agent == "writer_agent"));
    assert_eq!(downstream.bodies().await.len(), 1);
}
