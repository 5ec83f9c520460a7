//! Model infrastructure module
//!
//! Provides the chat-completion capability used by agent endpoints and the
//! orchestrator.
//!
//! # Structure
//! - `types` - Request, Response, Error types
//! - `traits` - ModelProvider trait
//! - `adapter` - Message and completion format adapters
//! - `factory` - Builds a provider from `BackendConfig`
//! - `clients` - Azure OpenAI and OpenAI-compatible gateway clients

pub mod adapter;
pub mod clients;
pub mod factory;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use factory::ProviderFactory;
pub use traits::ModelProvider;
pub use types::{ModelError, ModelRequest, ModelResponse};
