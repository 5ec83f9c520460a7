//! # Backend Configuration
//!
//! Selects the chat-completion backend shared by the agents server and the
//! orchestrator.
//!
//! | Type | Endpoint | Auth |
//! |------|----------|------|
//! | `azure` | Managed Azure OpenAI deployment | `api-key` header |
//! | `gateway` | OpenAI-compatible model gateway | Bearer token |
//!
//! Without a `[backend]` section the selection follows the environment:
//! a non-empty `AZURE_OPENAI_API_KEY` selects Azure, anything else selects
//! the GitHub Models gateway authenticated with `GITHUB_TOKEN`.

use super::defaults::{
    DEFAULT_AZURE_API_VERSION, DEFAULT_GATEWAY_ENDPOINT, DEFAULT_GATEWAY_MODEL,
    DEFAULT_GATEWAY_TEMPERATURE,
};
use super::error::ConfigError;
use serde::Deserialize;
use std::env;
use tracing::warn;

pub const AZURE_API_KEY_VAR: &str = "AZURE_OPENAI_API_KEY";
pub const AZURE_ENDPOINT_VAR: &str = "AZURE_OPENAI_ENDPOINT";
pub const AZURE_API_VERSION_VAR: &str = "AZURE_OPENAI_API_VERSION";
pub const AZURE_REASONING_DEPLOYMENT_VAR: &str = "AZURE_OPENAI_REASONING_DEPLOYMENT_NAME";
pub const AZURE_COMPLETION_DEPLOYMENT_VAR: &str = "AZURE_OPENAI_COMPLETION_DEPLOYMENT_NAME";
pub const GATEWAY_MODEL_VAR: &str = "AZURE_OPENAI_COMPLETION_MODEL";
pub const GATEWAY_TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Which process is asking for a backend. Only the Azure deployment differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendRole {
    /// Writer/editor endpoints
    Agents,
    /// Tool-calling orchestrator
    Orchestrator,
}

impl BackendRole {
    fn deployment_var(self) -> &'static str {
        match self {
            BackendRole::Agents => AZURE_REASONING_DEPLOYMENT_VAR,
            BackendRole::Orchestrator => AZURE_COMPLETION_DEPLOYMENT_VAR,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AzureSettings {
    pub endpoint: Option<String>,
    pub deployment: Option<String>,
    pub api_version: String,
    pub api_key: Option<String>,
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GatewaySettings {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BackendConfig {
    Azure(AzureSettings),
    Gateway(GatewaySettings),
}

impl BackendConfig {
    /// Provider id used in logs and error messages.
    pub fn id(&self) -> &'static str {
        match self {
            BackendConfig::Azure(_) => "azure",
            BackendConfig::Gateway(_) => "gateway",
        }
    }

    /// Select a backend from process environment variables.
    pub fn from_env(role: BackendRole) -> Self {
        Self::from_lookup(role, |name| env::var(name).ok())
    }

    /// Select a backend using `lookup` to read variables.
    pub fn from_lookup<F>(role: BackendRole, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        match read(AZURE_API_KEY_VAR) {
            Some(api_key) => BackendConfig::Azure(AzureSettings {
                endpoint: read(AZURE_ENDPOINT_VAR),
                deployment: read(role.deployment_var()),
                api_version: read(AZURE_API_VERSION_VAR)
                    .unwrap_or_else(|| DEFAULT_AZURE_API_VERSION.to_string()),
                api_key: Some(api_key),
                temperature: None,
            }),
            None => BackendConfig::Gateway(GatewaySettings {
                endpoint: DEFAULT_GATEWAY_ENDPOINT.to_string(),
                model: read(GATEWAY_MODEL_VAR).unwrap_or_else(|| DEFAULT_GATEWAY_MODEL.to_string()),
                api_key: read(GATEWAY_TOKEN_VAR),
                temperature: Some(DEFAULT_GATEWAY_TEMPERATURE),
            }),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub(crate) enum RawBackend {
    Azure {
        endpoint: Option<String>,
        deployment: Option<String>,
        api_version: Option<String>,
        api_key: Option<String>,
        temperature: Option<f32>,
    },
    Gateway {
        endpoint: Option<String>,
        model: Option<String>,
        api_key: Option<String>,
        temperature: Option<f32>,
    },
}

impl TryFrom<RawBackend> for BackendConfig {
    type Error = ConfigError;

    fn try_from(raw: RawBackend) -> Result<Self, Self::Error> {
        match raw {
            RawBackend::Azure {
                endpoint,
                deployment,
                api_version,
                api_key,
                temperature,
            } => {
                let endpoint = endpoint.ok_or(ConfigError::MissingBackendField {
                    backend: "azure",
                    field: "endpoint",
                })?;
                let deployment = deployment.ok_or(ConfigError::MissingBackendField {
                    backend: "azure",
                    field: "deployment",
                })?;
                Ok(BackendConfig::Azure(AzureSettings {
                    endpoint: Some(endpoint),
                    deployment: Some(deployment),
                    api_version: api_version
                        .unwrap_or_else(|| DEFAULT_AZURE_API_VERSION.to_string()),
                    api_key: api_key.and_then(|spec| expand_secret("azure", &spec)),
                    temperature,
                }))
            }
            RawBackend::Gateway {
                endpoint,
                model,
                api_key,
                temperature,
            } => Ok(BackendConfig::Gateway(GatewaySettings {
                endpoint: endpoint.unwrap_or_else(|| DEFAULT_GATEWAY_ENDPOINT.to_string()),
                model: model.unwrap_or_else(|| DEFAULT_GATEWAY_MODEL.to_string()),
                api_key: api_key.and_then(|spec| expand_secret("gateway", &spec)),
                temperature: temperature.or(Some(DEFAULT_GATEWAY_TEMPERATURE)),
            })),
        }
    }
}

/// Resolve `${VAR}` references in a secret. Unset variables yield no key.
fn expand_secret(backend: &str, spec: &str) -> Option<String> {
    let raw = spec.trim();
    if raw.is_empty() {
        return None;
    }
    match shellexpand::env(raw) {
        Ok(value) if !value.trim().is_empty() => Some(value.into_owned()),
        Ok(_) => None,
        Err(err) => {
            warn!(
                backend,
                env_var = err.var_name.as_str(),
                "API key environment variable is not set"
            );
            None
        }
    }
}
