use super::super::dto::{AgentResponse, EditorRequest, ErrorResponse, WriterRequest};
use super::super::state::AgentsState;
use crate::model::ModelError;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use std::sync::Arc;
use tracing::{error, info};

type AgentResult = Result<Json<AgentResponse>, (StatusCode, Json<ErrorResponse>)>;

#[utoipa::path(
    post,
    path = "/writer_agent",
    tag = "agents",
    request_body = WriterRequest,
    responses(
        (status = 200, description = "Story generated", body = AgentResponse),
        (status = 500, description = "Language model call failed", body = ErrorResponse)
    )
)]
pub async fn writer_handler(
    State(state): State<Arc<AgentsState>>,
    Json(payload): Json<WriterRequest>,
) -> AgentResult {
    info!(input_chars = payload.input.len(), "Received /writer_agent request");
    respond("writer", state.endpoints().write(&payload.input).await)
}

#[utoipa::path(
    post,
    path = "/editor_agent",
    tag = "agents",
    request_body = EditorRequest,
    responses(
        (status = 200, description = "Text edited", body = AgentResponse),
        (status = 500, description = "Language model call failed", body = ErrorResponse)
    )
)]
pub async fn editor_handler(
    State(state): State<Arc<AgentsState>>,
    Json(payload): Json<EditorRequest>,
) -> AgentResult {
    info!(text_chars = payload.text.len(), "Received /editor_agent request");
    respond("editor", state.endpoints().edit(&payload.text).await)
}

fn respond(agent: &str, result: Result<String, ModelError>) -> AgentResult {
    match result {
        Ok(response) => Ok(Json(AgentResponse { response })),
        Err(err) => {
            error!(agent, error = %err, "Agent completion failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            ))
        }
    }
}
