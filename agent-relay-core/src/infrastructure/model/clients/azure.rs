//! Azure OpenAI deployment client

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info};

use super::base::{Auth, HttpClientBase};
use crate::config::AzureSettings;
use crate::infrastructure::model::adapter::MessageAdapter;
use crate::infrastructure::model::traits::ModelProvider;
use crate::infrastructure::model::types::{ModelError, ModelRequest, ModelResponse};

#[derive(Clone)]
pub struct AzureOpenAIClient {
    base: HttpClientBase,
    deployment: Option<String>,
    api_version: String,
    temperature: Option<f32>,
}

impl AzureOpenAIClient {
    pub fn from_settings(settings: &AzureSettings) -> Self {
        Self {
            base: HttpClientBase::new(
                "azure",
                settings.endpoint.clone().unwrap_or_default(),
                settings.api_key.clone(),
            ),
            deployment: settings.deployment.clone(),
            api_version: settings.api_version.clone(),
            temperature: settings.temperature,
        }
    }

    /// `{endpoint}/openai/deployments/{deployment}/chat/completions?api-version={version}`
    fn completions_url(&self) -> Result<String, ModelError> {
        if self.base.endpoint.trim().is_empty() {
            return Err(ModelError::missing_setting(&self.base.id, "endpoint"));
        }
        let deployment = self
            .deployment
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| ModelError::missing_setting(&self.base.id, "deployment"))?;
        let path = format!("openai/deployments/{deployment}/chat/completions");
        Ok(format!(
            "{}?api-version={}",
            self.base.build_url(&path),
            self.api_version
        ))
    }
}

#[async_trait]
impl ModelProvider for AzureOpenAIClient {
    async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError> {
        let api_key = self.base.require_api_key()?;
        let url = self.completions_url()?;

        let payload = AzureRequest {
            messages: MessageAdapter::to_openai_format(&request.messages),
            temperature: request.temperature.or(self.temperature),
        };

        info!(
            provider = self.base.id.as_str(),
            deployment = self.deployment.as_deref(),
            messages = request.messages.len(),
            "Sending request to Azure OpenAI deployment"
        );

        let body = self
            .base
            .post_json(&url, Auth::ApiKeyHeader(api_key), &payload)
            .await?;
        debug!("Received response from Azure OpenAI deployment");

        Ok(ModelResponse::new(MessageAdapter::completion_text(&body)))
    }
}

#[derive(Serialize)]
struct AzureRequest {
    messages: Vec<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}
