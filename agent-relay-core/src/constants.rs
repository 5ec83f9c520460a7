//! Application constants
//!
//! Single source of truth for paths, addresses and other constants.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/agents.toml";

/// Environment files, loaded in order
pub const ENV_PATHS: [&str; 2] = ["config/.env", ".env"];

/// Default bind address of the agents server
pub const DEFAULT_AGENTS_BIND: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8000);

/// Default bind address of the relay (tool protocol) server
pub const DEFAULT_RELAY_BIND: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8001);

/// Default tool protocol endpoint the orchestrator connects to
pub const DEFAULT_RELAY_URL: &str = "http://127.0.0.1:8001/mcp";

/// Name announced by the tool protocol server
pub const TOOL_SERVER_NAME: &str = "MCP_Agents";

/// Tool protocol revision announced on `initialize`
pub const PROTOCOL_VERSION: &str = "2025-06-18";

/// Header carrying the tool protocol session id
pub const SESSION_HEADER: &str = "mcp-session-id";
