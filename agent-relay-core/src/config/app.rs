use super::backend::{BackendConfig, BackendRole};
use super::error::ConfigError;
use super::prompts::PromptTemplates;
use super::server::ServerSettings;
use crate::domain::agent::AgentDescriptor;
use std::path::Path;

/// Application configuration loaded from agents.toml
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub agents: Vec<AgentDescriptor>,
    pub prompts: PromptTemplates,
    pub server: ServerSettings,
    /// Explicit backend; `None` means select from the environment
    pub backend: Option<BackendConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            agents: super::defaults::default_agents(),
            prompts: PromptTemplates::default(),
            server: ServerSettings::default(),
            backend: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a file path (or default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    /// Backend for `role`, falling back to environment-driven selection.
    pub fn backend_for(&self, role: BackendRole) -> BackendConfig {
        self.backend
            .clone()
            .unwrap_or_else(|| BackendConfig::from_env(role))
    }
}
