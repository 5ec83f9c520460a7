use super::errors::AgentError;
use super::models::AgentDirective;
use serde_json::Value;

/// Read the action out of a model reply. Accepts bare JSON, fenced JSON, or
/// a JSON object embedded in surrounding prose.
pub fn parse_directive(content: &str) -> Result<AgentDirective, AgentError> {
    match extract_json(content) {
        Some(value) => parse_action_value(value),
        None => Err(AgentError::InvalidResponse(
            "expected JSON object in agent response".into(),
        )),
    }
}

fn parse_action_value(value: Value) -> Result<AgentDirective, AgentError> {
    match value {
        Value::Object(map) => {
            let Some(action) = map.get("action").and_then(Value::as_str) else {
                return Err(AgentError::InvalidResponse(
                    "missing action field in agent response".into(),
                ));
            };
            match action {
                "call_tool" => {
                    let tool = map.get("tool").and_then(Value::as_str).ok_or_else(|| {
                        AgentError::InvalidResponse("call_tool action missing tool field".into())
                    })?;
                    let input = map
                        .get("input")
                        .cloned()
                        .unwrap_or_else(|| Value::Object(Default::default()));
                    Ok(AgentDirective::CallTool {
                        tool: tool.to_string(),
                        input,
                    })
                }
                "final" => {
                    let response = map.get("response").and_then(Value::as_str).ok_or_else(|| {
                        AgentError::InvalidResponse("final action missing response field".into())
                    })?;
                    Ok(AgentDirective::Final {
                        response: response.to_string(),
                    })
                }
                other => Err(AgentError::InvalidResponse(format!(
                    "unknown action value: {other}"
                ))),
            }
        }
        Value::String(text) => parse_directive(&text),
        other => Err(AgentError::InvalidResponse(format!(
            "unsupported response type: {other}"
        ))),
    }
}

fn extract_json(content: &str) -> Option<Value> {
    let trimmed = content.trim();

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return Some(value);
    }

    if trimmed.starts_with("```") {
        let stripped = trimmed
            .trim_start_matches("```json")
            .trim_start_matches("```JSON")
            .trim_start_matches("```");
        if let Some(end) = stripped.rfind("```") {
            if let Ok(value) = serde_json::from_str::<Value>(stripped[..end].trim()) {
                return Some(value);
            }
        }
    }

    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
        if start < end {
            if let Ok(value) = serde_json::from_str::<Value>(&trimmed[start..=end]) {
                return Some(value);
            }
        }
    }

    None
}
