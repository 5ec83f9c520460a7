//! HTTP client for the tool protocol, used by the orchestrator.

use super::types::{RpcError, RpcRequest, RpcResponse, ToolCallResult, ToolDefinition};
use crate::constants::{PROTOCOL_VERSION, SESSION_HEADER};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum RpcClientError {
    #[error("failed to reach tool server at {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("tool server returned error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("tool server returned an invalid response: {0}")]
    InvalidResponse(String),
}

impl From<RpcError> for RpcClientError {
    fn from(error: RpcError) -> Self {
        Self::Rpc {
            code: error.code,
            message: error.message,
        }
    }
}

pub struct RpcClient {
    http: Client,
    url: String,
    next_id: AtomicU64,
    session_id: Mutex<Option<String>>,
}

#[derive(Deserialize)]
struct ToolList {
    tools: Vec<ToolDefinition>,
}

impl RpcClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            url: url.into(),
            next_id: AtomicU64::new(1),
            session_id: Mutex::new(None),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Handshake: `initialize` then `notifications/initialized`.
    pub async fn initialize(&self) -> Result<Value, RpcClientError> {
        let result = self
            .request(
                "initialize",
                json!({
                    "protocolVersion": PROTOCOL_VERSION,
                    "capabilities": {},
                    "clientInfo": {
                        "name": "orchestrator",
                        "version": env!("CARGO_PKG_VERSION"),
                    }
                }),
            )
            .await?;
        self.notify("notifications/initialized").await?;
        info!(url = self.url.as_str(), "Tool protocol session established");
        Ok(result)
    }

    pub async fn list_tools(&self) -> Result<Vec<ToolDefinition>, RpcClientError> {
        let result = self.request("tools/list", json!({})).await?;
        let list: ToolList = serde_json::from_value(result)
            .map_err(|e| RpcClientError::InvalidResponse(format!("tools/list: {e}")))?;
        Ok(list.tools)
    }

    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Value,
    ) -> Result<ToolCallResult, RpcClientError> {
        let result = self
            .request("tools/call", json!({ "name": name, "arguments": arguments }))
            .await?;
        serde_json::from_value(result)
            .map_err(|e| RpcClientError::InvalidResponse(format!("tools/call: {e}")))
    }

    async fn request(&self, method: &str, params: Value) -> Result<Value, RpcClientError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest::new(Some(json!(id)), method, Some(params));
        debug!(method, id, "Sending JSON-RPC request");

        let response = self.post(&request).await?;
        if let Some(session) = response
            .headers()
            .get(SESSION_HEADER)
            .and_then(|value| value.to_str().ok())
        {
            *self.session_id.lock().await = Some(session.to_string());
        }

        let body: RpcResponse = response
            .json()
            .await
            .map_err(|e| RpcClientError::InvalidResponse(format!("{method}: {e}")))?;

        match (body.result, body.error) {
            (_, Some(error)) => Err(error.into()),
            (Some(result), None) => Ok(result),
            (None, None) => Err(RpcClientError::InvalidResponse(format!(
                "{method}: response has neither result nor error"
            ))),
        }
    }

    async fn notify(&self, method: &str) -> Result<(), RpcClientError> {
        let request = RpcRequest::new(None, method, None);
        let response = self.post(&request).await?;
        if response.status() != StatusCode::ACCEPTED && !response.status().is_success() {
            return Err(RpcClientError::InvalidResponse(format!(
                "{method}: unexpected status {}",
                response.status()
            )));
        }
        Ok(())
    }

    async fn post(&self, request: &RpcRequest) -> Result<reqwest::Response, RpcClientError> {
        let mut builder = self
            .http
            .post(&self.url)
            .header("Accept", "application/json, text/event-stream")
            .json(request);
        if let Some(session) = self.session_id.lock().await.as_deref() {
            builder = builder.header(SESSION_HEADER, session);
        }
        builder
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|source| RpcClientError::Network {
                url: self.url.clone(),
                source,
            })
    }
}
