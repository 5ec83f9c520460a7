// Tool protocol tests - JSON-RPC over POST /mcp against the relay router
//
// Raw requests exercise the wire format; RpcClient exercises the handshake.

#[path = "../support/mod.rs"]
mod support;

use agent_relay_core::constants::SESSION_HEADER;
use agent_relay_core::directory::AgentDirectory;
use agent_relay_core::relay::DispatchRelay;
use agent_relay_core::rpc::{RpcClient, RpcClientError};
use agent_relay_core::server::relay_router;
use axum::Router;
use axum::routing::post;
use reqwest::StatusCode;
use serde_json::{Value, json};
use support::{RecordingAgent, agent, spawn};

const STORY: &str = "{\"response\": \"A robot danced.\"}";

struct Harness {
    mcp_url: String,
    base: String,
    downstream: RecordingAgent,
}

async fn start() -> Harness {
    let downstream = RecordingAgent::replying(STORY);
    let agent_addr = spawn(downstream.router("/writer_agent")).await;
    let directory = AgentDirectory::new(vec![
        agent("writer_agent", format!("http://{agent_addr}/writer_agent")),
        agent("editor_agent", format!("http://{agent_addr}/editor_agent")),
    ])
    .expect("directory");
    let addr = spawn(relay_router(DispatchRelay::new(directory), &[])).await;
    Harness {
        mcp_url: format!("http://{addr}/mcp"),
        base: format!("http://{addr}"),
        downstream,
    }
}

async fn post_raw(url: &str, body: &str) -> reqwest::Response {
    reqwest::Client::new()
        .post(url)
        .header("Content-Type", "application/json")
        .body(body.to_string())
        .send()
        .await
        .expect("request")
}

async fn rpc(url: &str, method: &str, params: Value) -> Value {
    let body = json!({"jsonrpc": "2.0", "id": 7, "method": method, "params": params});
    post_raw(url, &body.to_string())
        .await
        .json()
        .await
        .expect("json")
}

// ============================================================================
// Wire format
// ============================================================================

#[tokio::test]
async fn initialize_returns_session_header() {
    let harness = start().await;
    let body = json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}});

    let response = post_raw(&harness.mcp_url, &body.to_string()).await;

    assert!(response.headers().get(SESSION_HEADER).is_some());
    let reply: Value = response.json().await.expect("json");
    assert_eq!(reply["id"], 1);
    assert_eq!(reply["result"]["serverInfo"]["name"], "MCP_Agents");
    assert!(reply["result"]["capabilities"]["tools"].is_object());
}

#[tokio::test]
async fn notification_is_accepted_without_body() {
    let harness = start().await;

    let response = post_raw(
        &harness.mcp_url,
        r#"{"jsonrpc": "2.0", "method": "notifications/initialized"}"#,
    )
    .await;

    assert_eq!(response.status(), StatusCode::ACCEPTED);
}

#[tokio::test]
async fn tools_list_advertises_both_tools() {
    let harness = start().await;

    let reply = rpc(&harness.mcp_url, "tools/list", json!({})).await;

    let names: Vec<&str> = reply["result"]["tools"]
        .as_array()
        .expect("tools")
        .iter()
        .filter_map(|tool| tool["name"].as_str())
        .collect();
    assert_eq!(names, ["list_agents", "execute_agent"]);
}

#[tokio::test]
async fn malformed_json_is_parse_error() {
    let harness = start().await;

    let reply: Value = post_raw(&harness.mcp_url, "{not json")
        .await
        .json()
        .await
        .expect("json");

    assert_eq!(reply["error"]["code"], -32700);
    assert_eq!(reply["id"], Value::Null);
}

#[tokio::test]
async fn non_object_message_is_invalid_request() {
    let harness = start().await;

    let reply: Value = post_raw(&harness.mcp_url, "42")
        .await
        .json()
        .await
        .expect("json");

    assert_eq!(reply["error"]["code"], -32600);
    assert_eq!(reply["id"], Value::Null);
}

#[tokio::test]
async fn mistyped_method_is_invalid_request() {
    let harness = start().await;

    let reply: Value = post_raw(&harness.mcp_url, r#"{"jsonrpc":"2.0","id":1,"method":5}"#)
        .await
        .json()
        .await
        .expect("json");

    assert_eq!(reply["error"]["code"], -32600);
    assert_eq!(reply["id"], 1);
}

#[tokio::test]
async fn missing_method_is_invalid_request() {
    let harness = start().await;

    for body in [r#"{"jsonrpc":"2.0","id":1}"#, r#"{"jsonrpc":"2.0","id":1,"method":""}"#] {
        let reply: Value = post_raw(&harness.mcp_url, body)
            .await
            .json()
            .await
            .expect("json");

        assert_eq!(reply["error"]["code"], -32600, "body: {body}");
        assert_eq!(reply["id"], 1);
    }
}

#[tokio::test]
async fn wrong_protocol_version_is_invalid_request() {
    let harness = start().await;

    let reply: Value = post_raw(&harness.mcp_url, r#"{"jsonrpc":"1.0","id":3,"method":"ping"}"#)
        .await
        .json()
        .await
        .expect("json");

    assert_eq!(reply["error"]["code"], -32600);
    assert_eq!(reply["id"], 3);
}

#[tokio::test]
async fn unknown_method_is_reported() {
    let harness = start().await;

    let reply = rpc(&harness.mcp_url, "resources/list", json!({})).await;

    assert_eq!(reply["error"]["code"], -32601);
    assert_eq!(reply["id"], 7);
}

#[tokio::test]
async fn unknown_tool_is_invalid_params() {
    let harness = start().await;

    let reply = rpc(
        &harness.mcp_url,
        "tools/call",
        json!({"name": "delete_agent", "arguments": {}}),
    )
    .await;

    assert_eq!(reply["error"]["code"], -32602);
    assert!(harness.downstream.bodies().await.is_empty());
}

// ============================================================================
// Tool calls
// ============================================================================

#[tokio::test]
async fn list_agents_returns_directory_in_order() {
    let harness = start().await;

    let reply = rpc(
        &harness.mcp_url,
        "tools/call",
        json!({"name": "list_agents", "arguments": {}}),
    )
    .await;

    let result = &reply["result"];
    assert_eq!(result["isError"], false);
    let agents: Value =
        serde_json::from_str(result["content"][0]["text"].as_str().expect("text")).expect("json");
    assert_eq!(agents[0]["id"], "writer_agent");
    assert_eq!(agents[1]["id"], "editor_agent");
    assert_eq!(result["structuredContent"]["agents"], agents);
}

#[tokio::test]
async fn execute_agent_relays_body() {
    let harness = start().await;

    let reply = rpc(
        &harness.mcp_url,
        "tools/call",
        json!({
            "name": "execute_agent",
            "arguments": {"id": "writer_agent", "payload": "{\"input\": \"robots\"}"}
        }),
    )
    .await;

    assert_eq!(reply["result"]["isError"], false);
    assert_eq!(reply["result"]["content"][0]["text"], STORY);
    assert_eq!(
        harness.downstream.bodies().await,
        vec![json!({"input": "robots"})]
    );
}

#[tokio::test]
async fn relay_failure_is_tool_error() {
    let harness = start().await;

    let reply = rpc(
        &harness.mcp_url,
        "tools/call",
        json!({
            "name": "execute_agent",
            "arguments": {"id": "poet_agent", "payload": "{}"}
        }),
    )
    .await;

    let result = &reply["result"];
    assert_eq!(result["isError"], true);
    assert_eq!(result["content"][0]["text"], "Agent not found");
    assert_eq!(result["structuredContent"]["error"]["kind"], "not_found");
}

#[tokio::test]
async fn rest_directory_matches_tool() {
    let harness = start().await;

    let agents: Value = reqwest::get(format!("{}/agents", harness.base))
        .await
        .expect("request")
        .json()
        .await
        .expect("json");

    assert_eq!(agents[0]["id"], "writer_agent");
    assert_eq!(agents.as_array().map(Vec::len), Some(2));
}

// ============================================================================
// Client
// ============================================================================

#[tokio::test]
async fn client_handshake_and_calls() {
    let harness = start().await;
    let client = RpcClient::new(harness.mcp_url.clone());

    let info = client.initialize().await.expect("initialize");
    assert_eq!(info["serverInfo"]["name"], "MCP_Agents");

    let tools = client.list_tools().await.expect("tools");
    assert_eq!(tools.len(), 2);

    let result = client
        .call_tool(
            "execute_agent",
            json!({"id": "writer_agent", "payload": "{\"input\": \"robots\"}"}),
        )
        .await
        .expect("call");
    assert!(!result.is_error);
    assert_eq!(result.joined_text(), STORY);
}

#[tokio::test]
async fn client_reports_undecodable_reply_as_invalid_response() {
    let app = Router::new().route("/mcp", post(|| async { "<html>not json-rpc</html>" }));
    let addr = spawn(app).await;
    let client = RpcClient::new(format!("http://{addr}/mcp"));

    let err = client.list_tools().await.expect_err("undecodable reply");

    assert!(matches!(err, RpcClientError::InvalidResponse(_)), "got {err:?}");
}

#[tokio::test]
async fn client_surfaces_protocol_errors() {
    let harness = start().await;
    let client = RpcClient::new(harness.mcp_url.clone());

    let err = client
        .call_tool("delete_agent", json!({}))
        .await
        .expect_err("unknown tool");

    assert!(matches!(err, RpcClientError::Rpc { code: -32602, .. }));
}
