use super::docs;
use super::error::ServerError;
use super::routes;
use super::state::{AgentsState, RelayState};
use crate::endpoints::AgentEndpoints;
use crate::relay::DispatchRelay;
use crate::rpc::server::handle_rpc;
use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

pub fn agents_router(endpoints: AgentEndpoints, cors_origins: &[String]) -> Router {
    let state = Arc::new(AgentsState::new(endpoints));
    let app = Router::new()
        .route("/writer_agent", post(routes::agents::writer_handler))
        .route("/editor_agent", post(routes::agents::editor_handler))
        .route("/health", get(routes::health::health_handler))
        .route("/api-doc/openapi.json", get(docs::openapi_handler))
        .with_state(state);
    with_cors(app, cors_origins)
}

pub fn relay_router(relay: DispatchRelay, cors_origins: &[String]) -> Router {
    let state = Arc::new(RelayState::new(relay));
    let app = Router::new()
        .route("/mcp", post(handle_rpc))
        .route("/agents", get(routes::directory::agents_handler))
        .route("/health", get(routes::health::health_handler))
        .with_state(state);
    with_cors(app, cors_origins)
}

fn with_cors(app: Router, origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = origin.as_str(), "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    if origins.is_empty() {
        return app;
    }

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);
    app.layer(cors)
}

pub(super) async fn serve(app: Router, addr: SocketAddr) -> Result<(), ServerError> {
    info!(%addr, "Binding HTTP server");
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!(%addr, "HTTP server ready to accept connections");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(error) => {
            warn!(%error, "Unable to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
