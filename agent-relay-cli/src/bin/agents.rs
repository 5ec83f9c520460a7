//! Agents server entry point
//!
//! Hosts the writer and editor agents over HTTP, backed by the configured
//! chat-completion service.

use agent_relay_cli::init_tracing;
use agent_relay_core::config::{AppConfig, BackendRole};
use agent_relay_core::endpoints::AgentEndpoints;
use agent_relay_core::model::ProviderFactory;
use agent_relay_core::server;
use clap::Parser;
use std::error::Error;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "agents-server", about = "Writer and editor agents over HTTP")]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address (overrides config if specified)
    #[arg(long)]
    addr: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    init_tracing();
    info!("Starting agents server");

    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(addr) = args.addr {
        config.server.agents_bind = addr;
    }

    let backend = config.backend_for(BackendRole::Agents);
    debug!(backend = backend.id(), "Backend selected");

    let endpoints = AgentEndpoints::new(ProviderFactory::create(&backend), config.prompts.clone());
    server::serve_agents(endpoints, &config.server).await?;

    Ok(())
}
