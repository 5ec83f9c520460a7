//! Provider factory - creates a chat-completion client from backend config

use super::clients::{AzureOpenAIClient, OpenAIClient};
use super::traits::ModelProvider;
use crate::config::BackendConfig;
use std::sync::Arc;
use tracing::info;

/// Factory for creating model providers from backend config.
pub struct ProviderFactory;

impl ProviderFactory {
    /// Creates the provider matching the selected backend.
    ///
    /// - `azure` → Azure OpenAI deployment
    /// - `gateway` → OpenAI-compatible gateway
    pub fn create(config: &BackendConfig) -> Arc<dyn ModelProvider> {
        info!(backend = config.id(), "Initialising chat-completion backend");
        match config {
            BackendConfig::Azure(settings) => Arc::new(AzureOpenAIClient::from_settings(settings)),
            BackendConfig::Gateway(settings) => Arc::new(OpenAIClient::from_settings(settings)),
        }
    }
}
