use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("failed to read config from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("agent id '{id}' is declared more than once")]
    DuplicateAgent { id: String },

    #[error("agent '{id}' has an invalid url '{url}': expected an absolute http(s) endpoint")]
    InvalidAgentUrl { id: String, url: String },

    #[error("{backend} backend is missing required field '{field}'")]
    MissingBackendField {
        backend: &'static str,
        field: &'static str,
    },

    #[error("invalid bind address '{value}' for '{field}'")]
    InvalidBindAddress { field: &'static str, value: String },
}
