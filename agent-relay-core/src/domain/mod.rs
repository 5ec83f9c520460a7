pub mod agent;
pub mod types;
