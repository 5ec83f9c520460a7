//! Dispatch relay: forwards a JSON payload to the agent registered under an id.

mod errors;

pub use errors::RelayError;

use super::directory::AgentDirectory;
use crate::domain::agent::AgentDescriptor;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::value::RawValue;
use tracing::{debug, info, warn};

/// A call to one agent. `payload` holds a JSON document as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRequest {
    pub id: String,
    pub payload: String,
}

/// Raw downstream body on success.
pub type DispatchResult = Result<String, RelayError>;

#[derive(Debug, Clone)]
pub struct DispatchRelay {
    directory: AgentDirectory,
    http: Client,
}

impl DispatchRelay {
    pub fn new(directory: AgentDirectory) -> Self {
        Self::with_client(directory, Client::new())
    }

    pub fn with_client(directory: AgentDirectory, http: Client) -> Self {
        Self { directory, http }
    }

    pub fn directory(&self) -> &AgentDirectory {
        &self.directory
    }

    pub fn list_agents(&self) -> &[AgentDescriptor] {
        self.directory.list_agents()
    }

    pub async fn dispatch(&self, request: DispatchRequest) -> DispatchResult {
        self.execute_agent(&request.id, &request.payload).await
    }

    /// Look up `id`, POST `payload` verbatim to its url, return the body untouched.
    ///
    /// The payload is only validated as JSON; its text is never re-encoded.
    pub async fn execute_agent(&self, id: &str, payload: &str) -> DispatchResult {
        let Some(agent) = self.directory.get(id) else {
            warn!(agent = id, "Agent not found in directory");
            return Err(RelayError::AgentNotFound { id: id.to_string() });
        };

        serde_json::from_str::<&RawValue>(payload).map_err(|source| {
            warn!(agent = id, %source, "Rejecting payload that is not valid JSON");
            RelayError::InvalidPayload { source }
        })?;

        info!(agent = id, url = agent.url.as_str(), "Forwarding call to agent");
        let response = self
            .http
            .post(&agent.url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload.to_string())
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|source| RelayError::transport(id, source))?;

        let text = response
            .text()
            .await
            .map_err(|source| RelayError::transport(id, source))?;
        debug!(agent = id, bytes = text.len(), "Agent call completed");

        Ok(text)
    }
}
