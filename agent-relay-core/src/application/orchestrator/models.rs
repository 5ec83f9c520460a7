use crate::config::defaults::DEFAULT_ORCHESTRATOR_PROMPT;
use serde::Serialize;
use serde_json::Value;

const DEFAULT_MAX_STEPS: usize = 8;

/// One action requested by the model.
#[derive(Debug, Clone, PartialEq)]
pub enum AgentDirective {
    CallTool { tool: String, input: Value },
    Final { response: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentStep {
    pub tool: String,
    pub input: Value,
    pub success: bool,
    pub output: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrchestrationOutcome {
    pub response: String,
    pub steps: Vec<AgentStep>,
}

#[derive(Debug, Clone)]
pub struct OrchestratorOptions {
    pub system_prompt: String,
    pub max_steps: usize,
}

impl Default for OrchestratorOptions {
    fn default() -> Self {
        Self {
            system_prompt: DEFAULT_ORCHESTRATOR_PROMPT.to_string(),
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}
