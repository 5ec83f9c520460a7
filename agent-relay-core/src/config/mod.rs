pub mod agent;
pub mod app;
pub mod backend;
pub mod defaults;
pub mod error;
pub mod loader;
pub mod prompts;
pub mod server;

pub use crate::constants::CONFIG_PATH;
pub use app::AppConfig;
pub use backend::{AzureSettings, BackendConfig, BackendRole, GatewaySettings};
pub use error::ConfigError;
pub use loader::ensure_env_loaded;
pub use prompts::PromptTemplates;
pub use server::ServerSettings;
