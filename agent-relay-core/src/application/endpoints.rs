//! Writer and editor agents: one templated prompt, one completion.

use crate::config::PromptTemplates;
use crate::model::{ModelError, ModelProvider, ModelRequest};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Clone)]
pub struct AgentEndpoints {
    backend: Arc<dyn ModelProvider>,
    prompts: PromptTemplates,
}

impl AgentEndpoints {
    pub fn new(backend: Arc<dyn ModelProvider>, prompts: PromptTemplates) -> Self {
        Self { backend, prompts }
    }

    /// Short story for `input`.
    pub async fn write(&self, input: &str) -> Result<String, ModelError> {
        self.complete("writer", self.prompts.render_writer(input)).await
    }

    /// Polished version of `text`.
    pub async fn edit(&self, text: &str) -> Result<String, ModelError> {
        self.complete("editor", self.prompts.render_editor(text)).await
    }

    async fn complete(&self, agent: &str, prompt: String) -> Result<String, ModelError> {
        debug!(agent, prompt_chars = prompt.len(), "Submitting agent prompt");
        let response = self.backend.chat(ModelRequest::system_prompt(prompt)).await?;
        info!(agent, "Agent completion received");
        Ok(response.into_content())
    }
}
