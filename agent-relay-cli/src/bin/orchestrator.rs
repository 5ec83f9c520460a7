//! Orchestrator entry point
//!
//! Connects to the relay, lets the model plan agent calls for one task and
//! prints the outcome as JSON.

use agent_relay_cli::init_tracing;
use agent_relay_core::config::defaults::DEFAULT_TASK;
use agent_relay_core::config::{AppConfig, BackendRole};
use agent_relay_core::constants::DEFAULT_RELAY_URL;
use agent_relay_core::model::ProviderFactory;
use agent_relay_core::orchestrator::{Orchestrator, OrchestratorOptions};
use agent_relay_core::rpc::RpcClient;
use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "orchestrator", about = "Plan and run agent calls for a task")]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Tool endpoint of the relay server
    #[arg(long, default_value = DEFAULT_RELAY_URL)]
    relay_url: String,

    /// Maximum number of tool calls before giving up
    #[arg(long)]
    max_steps: Option<usize>,

    /// Task for the orchestrator
    task: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    init_tracing();

    let config = AppConfig::load(args.config.as_deref())?;
    let backend = config.backend_for(BackendRole::Orchestrator);
    debug!(backend = backend.id(), "Backend selected");

    let task = if args.task.is_empty() {
        DEFAULT_TASK.to_string()
    } else {
        args.task.join(" ")
    };

    let mut options = OrchestratorOptions::default();
    if let Some(max_steps) = args.max_steps {
        options.max_steps = max_steps;
    }

    let client = RpcClient::new(args.relay_url);
    client.initialize().await?;
    info!(url = client.url(), "Connected to relay");

    let orchestrator = Orchestrator::with_options(ProviderFactory::create(&backend), client, options);
    let outcome = orchestrator.run(&task).await?;

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
