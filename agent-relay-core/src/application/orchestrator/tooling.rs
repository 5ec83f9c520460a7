use crate::rpc::tools::EXECUTE_AGENT;
use crate::rpc::{RpcClient, RpcClientError, ToolCallResult, ToolDefinition};
use async_trait::async_trait;
use serde_json::Value;

/// Where the orchestrator discovers and calls tools.
#[async_trait]
pub trait ToolInvoker: Send + Sync {
    async fn list_tools(&self) -> Result<Vec<ToolDefinition>, RpcClientError>;

    async fn call_tool(&self, name: &str, arguments: Value)
    -> Result<ToolCallResult, RpcClientError>;
}

#[async_trait]
impl ToolInvoker for RpcClient {
    async fn list_tools(&self) -> Result<Vec<ToolDefinition>, RpcClientError> {
        RpcClient::list_tools(self).await
    }

    async fn call_tool(
        &self,
        name: &str,
        arguments: Value,
    ) -> Result<ToolCallResult, RpcClientError> {
        RpcClient::call_tool(self, name, arguments).await
    }
}

/// `execute_agent` takes its payload as JSON text; models often send an object.
pub(super) fn normalize_arguments(tool: &str, mut arguments: Value) -> Value {
    if tool != EXECUTE_AGENT {
        return arguments;
    }
    if let Some(payload) = arguments.get_mut("payload") {
        if payload.is_object() || payload.is_array() {
            *payload = Value::String(payload.to_string());
        }
    }
    arguments
}
