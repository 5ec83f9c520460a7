//! OpenAI-compatible gateway client (GitHub Models, OpenAI, local proxies)

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info};

use super::base::{Auth, HttpClientBase};
use crate::config::GatewaySettings;
use crate::infrastructure::model::adapter::MessageAdapter;
use crate::infrastructure::model::traits::ModelProvider;
use crate::infrastructure::model::types::{ModelError, ModelRequest, ModelResponse};

const CHAT_COMPLETIONS_PATH: &str = "chat/completions";

#[derive(Clone)]
pub struct OpenAIClient {
    base: HttpClientBase,
    model: String,
    temperature: Option<f32>,
}

impl OpenAIClient {
    pub fn from_settings(settings: &GatewaySettings) -> Self {
        Self {
            base: HttpClientBase::new("gateway", settings.endpoint.clone(), settings.api_key.clone()),
            model: settings.model.clone(),
            temperature: settings.temperature,
        }
    }
}

#[async_trait]
impl ModelProvider for OpenAIClient {
    async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError> {
        let api_key = self.base.require_api_key()?;
        let url = self.base.build_url(CHAT_COMPLETIONS_PATH);

        let payload = OpenAIRequest {
            model: &self.model,
            messages: MessageAdapter::to_openai_format(&request.messages),
            temperature: request.temperature.or(self.temperature),
            stream: false,
        };

        info!(
            provider = self.base.id.as_str(),
            model = self.model.as_str(),
            messages = request.messages.len(),
            "Sending request to OpenAI-compatible gateway"
        );

        let body = self.base.post_json(&url, Auth::Bearer(api_key), &payload).await?;
        debug!("Received response from OpenAI-compatible gateway");

        Ok(ModelResponse::new(MessageAdapter::completion_text(&body)))
    }
}

#[derive(Serialize)]
struct OpenAIRequest<'a> {
    model: &'a str,
    messages: Vec<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    stream: bool,
}
