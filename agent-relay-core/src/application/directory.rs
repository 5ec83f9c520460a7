//! Static agent directory

use crate::domain::agent::AgentDescriptor;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("agent id '{0}' is registered more than once")]
    DuplicateId(String),
}

/// Ordered, immutable registry of agent descriptors, unique by id.
/// Clones share the backing slice.
#[derive(Debug, Clone)]
pub struct AgentDirectory {
    agents: Arc<[AgentDescriptor]>,
}

impl AgentDirectory {
    pub fn new(agents: Vec<AgentDescriptor>) -> Result<Self, DirectoryError> {
        let mut seen = HashSet::new();
        for agent in &agents {
            if !seen.insert(agent.id.as_str()) {
                return Err(DirectoryError::DuplicateId(agent.id.clone()));
            }
        }
        Ok(Self {
            agents: agents.into(),
        })
    }

    /// Every registered agent in declaration order.
    pub fn list_agents(&self) -> &[AgentDescriptor] {
        &self.agents
    }

    /// Exact-match lookup by id.
    pub fn get(&self, id: &str) -> Option<&AgentDescriptor> {
        self.agents.iter().find(|agent| agent.id == id)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

impl Default for AgentDirectory {
    fn default() -> Self {
        Self {
            agents: crate::config::defaults::default_agents().into(),
        }
    }
}
