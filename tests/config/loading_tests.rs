// Config loading tests - AppConfig::load from files on disk

use agent_relay_core::config::{AppConfig, BackendConfig, BackendRole, ConfigError};
use serial_test::serial;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("agents.toml");
    fs::write(&path, content).expect("Failed to write agents.toml");
    path
}

#[test]
fn explicit_missing_file_is_error() {
    let result = AppConfig::load(Some(Path::new("/nonexistent/config/agents.toml")));
    assert!(matches!(result, Err(ConfigError::NotFound { .. })));
}

#[test]
fn invalid_toml_is_parse_error() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "[[agents]\nid = ");

    let result = AppConfig::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn full_config_is_loaded() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(
        dir.path(),
        r#"
[[agents]]
id = "writer_agent"
name = "Writer"
description = "Writes short stories"
url = "http://10.0.0.5:8000/writer_agent"

[[agents]]
id = "editor_agent"
name = "Editor"
description = "Edits text"
url = "http://10.0.0.5:8000/editor_agent"

[prompts]
writer = "Tell a tale about {{input}}"

[server]
agents_bind = "127.0.0.1:9000"
relay_bind = "127.0.0.1:9001"
cors_origins = ["http://localhost:3000"]

[backend]
type = "gateway"
model = "phi-4"
api_key = "literal-token"
"#,
    );

    let config = AppConfig::load(Some(&path)).expect("config");

    assert_eq!(config.agents.len(), 2);
    assert_eq!(config.agents[0].url, "http://10.0.0.5:8000/writer_agent");
    assert_eq!(config.prompts.render_writer("robots"), "Tell a tale about robots");
    assert_eq!(config.server.agents_bind.port(), 9000);
    assert_eq!(config.server.relay_bind.port(), 9001);
    assert_eq!(config.server.cors_origins, ["http://localhost:3000"]);

    match config.backend_for(BackendRole::Orchestrator) {
        BackendConfig::Gateway(settings) => {
            assert_eq!(settings.model, "phi-4");
            assert_eq!(settings.api_key.as_deref(), Some("literal-token"));
        }
        other => panic!("expected gateway backend, got {other:?}"),
    }
}

#[test]
fn duplicate_ids_are_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(
        dir.path(),
        r#"
[[agents]]
id = "writer_agent"
url = "http://localhost:8000/writer_agent"

[[agents]]
id = "writer_agent"
url = "http://localhost:8000/other"
"#,
    );

    let result = AppConfig::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::DuplicateAgent { .. })));
}

#[test]
#[serial]
fn agent_url_expands_environment() {
    // SAFETY: serialized with every other test touching the environment
    unsafe { std::env::set_var("AGENT_RELAY_TEST_HOST", "agents.internal") };
    let dir = tempdir().expect("tempdir");
    let path = write_config(
        dir.path(),
        r#"
[[agents]]
id = "writer_agent"
url = "http://${AGENT_RELAY_TEST_HOST}:8000/writer_agent"
"#,
    );

    let config = AppConfig::load(Some(&path)).expect("config");
    unsafe { std::env::remove_var("AGENT_RELAY_TEST_HOST") };

    assert_eq!(
        config.agents[0].url,
        "http://agents.internal:8000/writer_agent"
    );
}

#[test]
fn empty_file_uses_builtin_directory() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "");

    let config = AppConfig::load(Some(&path)).expect("config");

    let ids: Vec<&str> = config.agents.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["writer_agent", "editor_agent"]);
    assert!(config.backend.is_none());
}
