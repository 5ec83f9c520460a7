use super::tools;
use super::types::{RpcRequest, RpcResponse};
use crate::constants::{PROTOCOL_VERSION, SESSION_HEADER, TOOL_SERVER_NAME};
use crate::server::RelayState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Single JSON-RPC message per POST. Notifications are acknowledged with 202.
pub(crate) async fn handle_rpc(State(state): State<Arc<RelayState>>, body: String) -> Response {
    let message: Value = match serde_json::from_str(&body) {
        Ok(message) => message,
        Err(error) => {
            warn!(%error, "Rejecting malformed JSON-RPC message");
            return Json(RpcResponse::parse_error(format!("Parse error: {error}"))).into_response();
        }
    };

    let request = match decode_request(message) {
        Ok(request) => request,
        Err(response) => return Json(response).into_response(),
    };
    debug!(method = %request.method, "Received JSON-RPC request");

    if request.is_notification() {
        debug!(method = %request.method, "Acknowledged notification");
        return StatusCode::ACCEPTED.into_response();
    }

    let id = request.id.clone();
    match request.method.as_str() {
        "initialize" => handle_initialize(id),
        "ping" => Json(RpcResponse::success(id, json!({}))).into_response(),
        "tools/list" => Json(RpcResponse::success(
            id,
            json!({ "tools": tools::definitions() }),
        ))
        .into_response(),
        "tools/call" => {
            let response = match tools::call(state.relay(), request.params).await {
                Ok(result) => match serde_json::to_value(result) {
                    Ok(value) => RpcResponse::success(id, value),
                    Err(error) => RpcResponse::error(
                        id,
                        super::types::INTERNAL_ERROR,
                        format!("failed to encode tool result: {error}"),
                    ),
                },
                Err(error) => {
                    warn!(code = error.code, message = %error.message, "Tool call rejected");
                    RpcResponse::failure(id, error)
                }
            };
            Json(response).into_response()
        }
        other => {
            error!(method = other, "Unknown JSON-RPC method");
            Json(RpcResponse::method_not_found(id, other)).into_response()
        }
    }
}

/// Valid JSON that is not a well-formed request object is -32600.
fn decode_request(message: Value) -> Result<RpcRequest, RpcResponse> {
    let id = message.get("id").cloned();
    let request: RpcRequest = serde_json::from_value(message).map_err(|error| {
        warn!(%error, "Rejecting invalid JSON-RPC request object");
        RpcResponse::invalid_request(id.clone(), format!("Invalid request: {error}"))
    })?;

    if request.jsonrpc != "2.0" {
        return Err(RpcResponse::invalid_request(
            request.id,
            "Unsupported jsonrpc version (expected 2.0)",
        ));
    }
    if request.method.is_empty() {
        return Err(RpcResponse::invalid_request(request.id, "Missing method"));
    }
    Ok(request)
}

fn handle_initialize(id: Option<Value>) -> Response {
    let session_id = uuid::Uuid::new_v4().to_string();
    info!(session_id = session_id.as_str(), "Tool protocol session initialised");
    let result = json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": false }
        },
        "serverInfo": {
            "name": TOOL_SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION"),
        }
    });
    (
        [(SESSION_HEADER, session_id)],
        Json(RpcResponse::success(id, result)),
    )
        .into_response()
}
