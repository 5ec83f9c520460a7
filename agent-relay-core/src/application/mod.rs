pub mod directory;
pub mod endpoints;
pub mod orchestrator;
pub mod relay;
