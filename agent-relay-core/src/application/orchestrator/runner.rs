use super::errors::AgentError;
use super::models::{AgentDirective, AgentStep, OrchestrationOutcome, OrchestratorOptions};
use super::parser::parse_directive;
use super::prompt;
use super::tooling::{ToolInvoker, normalize_arguments};
use crate::model::{ModelProvider, ModelRequest};
use crate::rpc::RpcClientError;
use crate::types::ChatMessage;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Correction prompts sent before giving up on unparseable replies
const MAX_FORMAT_RETRIES: u8 = 2;

pub struct Orchestrator<T: ToolInvoker> {
    model: Arc<dyn ModelProvider>,
    tools: T,
    options: OrchestratorOptions,
}

impl<T: ToolInvoker> Orchestrator<T> {
    pub fn new(model: Arc<dyn ModelProvider>, tools: T) -> Self {
        Self::with_options(model, tools, OrchestratorOptions::default())
    }

    pub fn with_options(model: Arc<dyn ModelProvider>, tools: T, options: OrchestratorOptions) -> Self {
        Self {
            model,
            tools,
            options,
        }
    }

    pub async fn run(&self, task: &str) -> Result<OrchestrationOutcome, AgentError> {
        info!("Orchestration started");
        let tools = self.tools.list_tools().await?;
        debug!(tool_count = tools.len(), "Discovered tools");

        let mut messages = vec![
            ChatMessage::system(prompt::system_prompt(&self.options.system_prompt, &tools)),
            ChatMessage::user(task),
        ];
        let mut steps = Vec::new();
        let mut format_retries = 0;

        loop {
            let reply = self
                .model
                .chat(ModelRequest::new(messages.clone()))
                .await?
                .into_content();
            messages.push(ChatMessage::assistant(reply.clone()));

            let directive = match parse_directive(&reply) {
                Ok(directive) => directive,
                Err(error) if format_retries < MAX_FORMAT_RETRIES => {
                    format_retries += 1;
                    warn!(%error, attempt = format_retries, "Model reply was not a valid action");
                    messages.push(ChatMessage::user(prompt::FORMAT_REMINDER));
                    continue;
                }
                Err(error) => return Err(error),
            };

            match directive {
                AgentDirective::Final { response } => {
                    info!(steps = steps.len(), "Orchestration finished");
                    return Ok(OrchestrationOutcome { response, steps });
                }
                AgentDirective::CallTool { tool, input } => {
                    if steps.len() >= self.options.max_steps {
                        warn!(max_steps = self.options.max_steps, "Tool interaction limit reached");
                        return Err(AgentError::StepLimit(self.options.max_steps));
                    }
                    let step = self.execute(tool, input).await?;
                    messages.push(ChatMessage::user(prompt::tool_result_message(
                        &step.tool,
                        step.success,
                        &step.output,
                    )));
                    steps.push(step);
                }
            }
        }
    }

    async fn execute(&self, tool: String, input: serde_json::Value) -> Result<AgentStep, AgentError> {
        let input = normalize_arguments(&tool, input);
        info!(tool = tool.as_str(), "Calling tool");
        match self.tools.call_tool(&tool, input.clone()).await {
            Ok(result) => Ok(AgentStep {
                success: !result.is_error,
                output: result.joined_text(),
                tool,
                input,
            }),
            // protocol-level rejection, reported back so the model can correct itself
            Err(RpcClientError::Rpc { code, message }) => {
                warn!(tool = tool.as_str(), code, %message, "Tool call rejected");
                Ok(AgentStep {
                    success: false,
                    output: message,
                    tool,
                    input,
                })
            }
            Err(other) => Err(other.into()),
        }
    }
}
