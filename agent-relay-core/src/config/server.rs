use super::error::ConfigError;
use crate::constants::{DEFAULT_AGENTS_BIND, DEFAULT_RELAY_BIND};
use serde::Deserialize;
use std::net::SocketAddr;

/// Bind addresses and CORS origins for both HTTP servers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub agents_bind: SocketAddr,
    pub relay_bind: SocketAddr,
    pub cors_origins: Vec<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            agents_bind: DEFAULT_AGENTS_BIND,
            relay_bind: DEFAULT_RELAY_BIND,
            cors_origins: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawServer {
    agents_bind: Option<String>,
    relay_bind: Option<String>,
    #[serde(default)]
    cors_origins: Vec<String>,
}

impl TryFrom<RawServer> for ServerSettings {
    type Error = ConfigError;

    fn try_from(raw: RawServer) -> Result<Self, Self::Error> {
        Ok(Self {
            agents_bind: parse_bind("agents_bind", raw.agents_bind, DEFAULT_AGENTS_BIND)?,
            relay_bind: parse_bind("relay_bind", raw.relay_bind, DEFAULT_RELAY_BIND)?,
            cors_origins: raw.cors_origins,
        })
    }
}

fn parse_bind(
    field: &'static str,
    value: Option<String>,
    default: SocketAddr,
) -> Result<SocketAddr, ConfigError> {
    match value {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddress { field, value }),
        None => Ok(default),
    }
}
