//! `list_agents` and `execute_agent` exposed as protocol tools.

use super::types::{RpcError, ToolCallResult, ToolDefinition};
use crate::relay::DispatchRelay;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info};

pub const LIST_AGENTS: &str = "list_agents";
pub const EXECUTE_AGENT: &str = "execute_agent";

/// Tools advertised by `tools/list`.
pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: LIST_AGENTS.to_string(),
            description: "Returns a list of available agents with their details.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
        ToolDefinition {
            name: EXECUTE_AGENT.to_string(),
            description: "Executes the specified agent. `id` is the agent ID from list_agents; \
                          `payload` is a JSON object serialized as a string, sent as the agent's request body."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "id": {
                        "type": "string",
                        "description": "The ID of the agent to execute"
                    },
                    "payload": {
                        "type": "string",
                        "description": "JSON document sent to the agent, e.g. {\"input\": \"...\"}"
                    }
                },
                "required": ["id", "payload"]
            }),
        },
    ]
}

#[derive(Debug, Deserialize)]
struct CallParams {
    name: String,
    #[serde(default)]
    arguments: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ExecuteAgentArgs {
    id: String,
    payload: String,
}

/// Run a `tools/call`. Protocol misuse is an `RpcError`; relay failures are
/// tool results flagged with `isError`.
pub async fn call(relay: &DispatchRelay, params: Option<Value>) -> Result<ToolCallResult, RpcError> {
    let params: CallParams = params
        .ok_or_else(|| RpcError::invalid_params("tools/call requires params"))
        .and_then(|value| {
            serde_json::from_value(value)
                .map_err(|e| RpcError::invalid_params(format!("invalid tools/call params: {e}")))
        })?;

    debug!(tool = params.name.as_str(), "Dispatching tool call");
    match params.name.as_str() {
        LIST_AGENTS => list_agents(relay),
        EXECUTE_AGENT => {
            let arguments = params.arguments.unwrap_or(Value::Null);
            let args: ExecuteAgentArgs = serde_json::from_value(arguments).map_err(|e| {
                RpcError::invalid_params(format!("invalid arguments for {EXECUTE_AGENT}: {e}"))
            })?;
            Ok(execute_agent(relay, args).await)
        }
        other => Err(RpcError::invalid_params(format!("Unknown tool: {other}"))),
    }
}

fn list_agents(relay: &DispatchRelay) -> Result<ToolCallResult, RpcError> {
    let agents = relay.list_agents();
    let text = serde_json::to_string(agents)
        .map_err(|e| RpcError::internal(format!("failed to encode agents: {e}")))?;
    Ok(ToolCallResult::text(text).with_structured(json!({ "agents": agents })))
}

async fn execute_agent(relay: &DispatchRelay, args: ExecuteAgentArgs) -> ToolCallResult {
    info!(agent = args.id.as_str(), "Executing agent via tool call");
    match relay.execute_agent(&args.id, &args.payload).await {
        Ok(body) => ToolCallResult::text(body),
        Err(error) => ToolCallResult::error_text(error.to_string()).with_structured(json!({
            "error": {
                "kind": error.kind(),
                "message": error.to_string(),
            }
        })),
    }
}
