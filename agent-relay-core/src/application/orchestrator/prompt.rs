use crate::rpc::ToolDefinition;

const ACTION_PROTOCOL: &str = r#"Respond with exactly one JSON object and nothing else.
To call a tool:
{"action": "call_tool", "tool": "<tool name>", "input": {<tool arguments>}}
When the task is complete:
{"action": "final", "response": "<answer for the user>"}"#;

pub(super) const FORMAT_REMINDER: &str =
    "Your last reply was not a valid action. Reply with a single JSON object as instructed.";

pub(super) fn system_prompt(base: &str, tools: &[ToolDefinition]) -> String {
    let mut prompt = base.trim().to_string();
    prompt.push_str("\n\nAvailable tools:\n");
    for tool in tools {
        prompt.push_str(&format!("- {}: {}\n", tool.name, tool.description));
        if let Some(properties) = tool
            .input_schema
            .get("properties")
            .and_then(|p| p.as_object())
            .filter(|p| !p.is_empty())
        {
            prompt.push_str(&format!(
                "  arguments: {}\n",
                serde_json::Value::Object(properties.clone())
            ));
        }
    }
    prompt.push('\n');
    prompt.push_str(ACTION_PROTOCOL);
    prompt
}

pub(super) fn tool_result_message(tool: &str, success: bool, output: &str) -> String {
    let status = if success { "succeeded" } else { "failed" };
    format!("Tool `{tool}` {status}. Result:\n{output}")
}
