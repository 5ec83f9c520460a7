use thiserror::Error;
use tracing::error;

/// Why a dispatch produced no agent output.
///
/// `Display` yields the plain-text form handed to tool callers.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Agent not found")]
    AgentNotFound { id: String },
    #[error("Invalid JSON payload")]
    InvalidPayload {
        #[source]
        source: serde_json::Error,
    },
    #[error("Error executing agent: {source}")]
    Transport {
        agent: String,
        #[source]
        source: reqwest::Error,
    },
}

impl RelayError {
    pub(super) fn transport(agent: &str, source: reqwest::Error) -> Self {
        error!(agent, error = %source, "Agent call failed");
        Self::Transport {
            agent: agent.to_string(),
            source,
        }
    }

    /// Short machine-readable kind, used in structured tool results.
    pub fn kind(&self) -> &'static str {
        match self {
            RelayError::AgentNotFound { .. } => "not_found",
            RelayError::InvalidPayload { .. } => "bad_payload",
            RelayError::Transport { .. } => "transport",
        }
    }
}
