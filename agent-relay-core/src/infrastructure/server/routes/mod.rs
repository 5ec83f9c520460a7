pub mod agents;
pub mod directory;
pub mod health;
