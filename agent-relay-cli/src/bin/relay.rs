//! Relay server entry point: exposes `list_agents` and `execute_agent` over
//! the tool protocol at `/mcp`.

use agent_relay_cli::init_tracing;
use agent_relay_core::config::AppConfig;
use agent_relay_core::directory::AgentDirectory;
use agent_relay_core::relay::DispatchRelay;
use agent_relay_core::server;
use clap::Parser;
use std::error::Error;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "relay-server", about = "Tool server relaying calls to HTTP agents")]
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
    info!("Starting relay server");

    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(addr) = args.addr {
        config.server.relay_bind = addr;
    }

    let directory = AgentDirectory::new(config.agents.clone())?;
    for agent in directory.list_agents() {
        info!(id = %agent.id, url = %agent.url, "Registered agent");
    }

    server::serve_relay(DispatchRelay::new(directory), &config.server).await?;

    Ok(())
}
