//! Tool-calling orchestrator: discovers relay tools and lets a language model
//! plan agent calls until it produces a final answer.

mod errors;
mod models;
mod parser;
mod prompt;
mod runner;
mod tooling;

pub use errors::AgentError;
pub use models::{AgentDirective, AgentStep, OrchestrationOutcome, OrchestratorOptions};
pub use parser::parse_directive;
pub use runner::Orchestrator;
pub use tooling::ToolInvoker;
