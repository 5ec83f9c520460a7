use super::dto::{AgentResponse, EditorRequest, ErrorResponse, HealthResponse, WriterRequest};
use super::routes;
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Agent Servers", description = "Distributed agents for text generation and editing"),
    paths(
        routes::agents::writer_handler,
        routes::agents::editor_handler,
        routes::health::health_handler
    ),
    components(
        schemas(
            WriterRequest,
            EditorRequest,
            AgentResponse,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "agents", description = "LLM-backed writing agents"),
        (name = "health", description = "Liveness probe")
    )
)]
pub(super) struct ApiDoc;

pub(super) async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
