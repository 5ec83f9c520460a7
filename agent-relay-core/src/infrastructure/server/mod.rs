mod docs;
mod dto;
mod error;
mod router;
mod routes;
mod state;

pub use dto::{AgentResponse, EditorRequest, ErrorResponse, HealthResponse, WriterRequest};
pub use error::ServerError;
pub use router::{agents_router, relay_router};
pub(crate) use state::RelayState;

use crate::config::ServerSettings;
use crate::endpoints::AgentEndpoints;
use crate::relay::DispatchRelay;
use tracing::info;

/// Serve `/writer_agent`, `/editor_agent` and `/health` until ctrl-c.
pub async fn serve_agents(
    endpoints: AgentEndpoints,
    settings: &ServerSettings,
) -> Result<(), ServerError> {
    info!(addr = %settings.agents_bind, "Starting agents server");
    let app = agents_router(endpoints, &settings.cors_origins);
    router::serve(app, settings.agents_bind).await
}

/// Serve the tool protocol at `/mcp` until ctrl-c.
pub async fn serve_relay(relay: DispatchRelay, settings: &ServerSettings) -> Result<(), ServerError> {
    info!(addr = %settings.relay_bind, agents = relay.directory().len(), "Starting relay server");
    let app = relay_router(relay, &settings.cors_origins);
    router::serve(app, settings.relay_bind).await
}
