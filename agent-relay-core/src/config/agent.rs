use crate::domain::agent::AgentDescriptor;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawAgent {
    id: String,
    name: Option<String>,
    #[serde(default)]
    description: String,
    url: String,
}

impl From<RawAgent> for AgentDescriptor {
    fn from(raw: RawAgent) -> Self {
        let url = shellexpand::env(&raw.url)
            .map(|cow| cow.into_owned())
            .unwrap_or(raw.url);
        let name = raw.name.unwrap_or_else(|| raw.id.clone());

        Self {
            id: raw.id,
            name,
            description: raw.description,
            url,
        }
    }
}
