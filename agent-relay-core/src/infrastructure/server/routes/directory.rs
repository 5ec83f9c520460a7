use super::super::state::RelayState;
use crate::agent::AgentDescriptor;
use axum::Json;
use axum::extract::State;
use std::sync::Arc;
use tracing::debug;

/// Plain REST view of the directory, same order as `list_agents`.
pub async fn agents_handler(State(state): State<Arc<RelayState>>) -> Json<Vec<AgentDescriptor>> {
    let agents = state.relay().list_agents();
    debug!(agent_count = agents.len(), "Serving /agents request");
    Json(agents.to_vec())
}
