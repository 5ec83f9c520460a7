use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A named HTTP endpoint performing one LLM-backed text transformation.
///
/// Descriptors are defined at startup and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AgentDescriptor {
    /// Unique key used by `execute_agent`
    pub id: String,
    /// Display name
    pub name: String,
    pub description: String,
    /// Absolute HTTP endpoint the relay posts to
    pub url: String,
}

impl AgentDescriptor {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            url: url.into(),
        }
    }
}
