use super::agent::RawAgent;
use super::backend::{BackendConfig, RawBackend};
use super::error::ConfigError;
use super::prompts::{PromptTemplates, RawPrompts};
use super::server::{RawServer, ServerSettings};
use super::{AppConfig, CONFIG_PATH};
use crate::constants::ENV_PATHS;
use crate::domain::agent::AgentDescriptor;
use dotenvy::from_filename;
use reqwest::Url;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;
use tracing::{debug, info};

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
pub(super) struct RawConfig {
    #[serde(default)]
    pub agents: Vec<RawAgent>,
    #[serde(default)]
    pub prompts: RawPrompts,
    #[serde(default)]
    pub server: RawServer,
    pub backend: Option<RawBackend>,
}

/// Ensures environment variables are loaded from `config/.env` and `.env`
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        for path in ENV_PATHS {
            if from_filename(path).is_ok() {
                debug!(path, "Loaded environment file");
            }
        }
    });
}

/// Load and validate configuration.
///
/// A missing file at the default path yields the built-in configuration; a
/// missing file at an explicit path is an error.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    ensure_env_loaded();
    match path {
        Some(path) => read_config(path),
        None => match read_config(Path::new(CONFIG_PATH)) {
            Err(ConfigError::NotFound { path }) => {
                info!(path = %path.display(), "No configuration file, using built-in defaults");
                Ok(AppConfig::default())
            }
            other => other,
        },
    }
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    debug!(path = %path.display(), "Reading configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let parsed: RawConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_and_build(parsed)
}

fn validate_and_build(parsed: RawConfig) -> Result<AppConfig, ConfigError> {
    let agents = if parsed.agents.is_empty() {
        super::defaults::default_agents()
    } else {
        parsed
            .agents
            .into_iter()
            .map(AgentDescriptor::from)
            .collect()
    };
    validate_agents(&agents)?;

    let backend = parsed.backend.map(BackendConfig::try_from).transpose()?;

    Ok(AppConfig {
        agents,
        prompts: PromptTemplates::from(parsed.prompts),
        server: ServerSettings::try_from(parsed.server)?,
        backend,
    })
}

fn validate_agents(agents: &[AgentDescriptor]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for agent in agents {
        if !seen.insert(agent.id.as_str()) {
            return Err(ConfigError::DuplicateAgent {
                id: agent.id.clone(),
            });
        }
        let valid = Url::parse(&agent.url)
            .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
            .unwrap_or(false);
        if !valid {
            return Err(ConfigError::InvalidAgentUrl {
                id: agent.id.clone(),
                url: agent.url.clone(),
            });
        }
    }
    Ok(())
}
