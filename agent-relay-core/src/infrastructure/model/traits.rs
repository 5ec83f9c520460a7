//! Model traits

use super::types::{ModelError, ModelRequest, ModelResponse};
use async_trait::async_trait;

/// Chat-completion capability shared by every backend
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Send a chat request and wait for the single completion
    async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError>;
}
