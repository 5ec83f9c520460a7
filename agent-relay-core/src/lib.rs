pub mod application;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;

pub use application::{directory, endpoints, orchestrator, relay};
pub use config::AppConfig;
pub use domain::{agent, types};
pub use infrastructure::{model, rpc, server};
