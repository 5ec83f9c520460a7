// Shared helpers: in-process HTTP servers on ephemeral ports.

#![allow(dead_code)]

use agent_relay_core::agent::AgentDescriptor;
use axum::Router;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// Serve `app` on 127.0.0.1 with an OS-assigned port.
pub async fn spawn(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    addr
}

/// An address nothing listens on.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    listener.local_addr().expect("local addr")
}

pub fn agent(id: &str, url: String) -> AgentDescriptor {
    AgentDescriptor::new(id, id, format!("{id} under test"), url)
}

/// A request as the downstream agent saw it.
#[derive(Debug, Clone)]
pub struct ReceivedCall {
    pub content_type: Option<String>,
    pub body: String,
}

/// Downstream agent that records every request body and answers with a fixed reply.
#[derive(Clone)]
pub struct RecordingAgent {
    calls: Arc<Mutex<Vec<ReceivedCall>>>,
    status: StatusCode,
    reply: &'static str,
}

impl RecordingAgent {
    pub fn replying(reply: &'static str) -> Self {
        Self::with_status(StatusCode::OK, reply)
    }

    pub fn with_status(status: StatusCode, reply: &'static str) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            status,
            reply,
        }
    }

    pub fn router(&self, path: &str) -> Router {
        Router::new()
            .route(path, post(record))
            .with_state(self.clone())
    }

    pub async fn calls(&self) -> Vec<ReceivedCall> {
        self.calls.lock().await.clone()
    }

    /// Received bodies decoded as JSON.
    pub async fn bodies(&self) -> Vec<Value> {
        self.calls
            .lock()
            .await
            .iter()
            .map(|call| serde_json::from_str(&call.body).expect("agent received JSON"))
            .collect()
    }
}

async fn record(
    State(agent): State<RecordingAgent>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, &'static str) {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(String::from);
    agent
        .calls
        .lock()
        .await
        .push(ReceivedCall { content_type, body });
    (agent.status, agent.reply)
}
