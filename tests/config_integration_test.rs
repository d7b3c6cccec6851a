//! Integration tests for configuration loading and validation
//!
//! Note: Tests that modify environment variables should be run with
//! --test-threads=1 to avoid interference between tests.

use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;
use vitalis::config::load_config;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("VITALIS_APPLICATION_LOG_LEVEL");
    std::env::remove_var("VITALIS_SERVER_HOST");
    std::env::remove_var("VITALIS_SERVER_PORT");
    std::env::remove_var("VITALIS_STORAGE_DATA_PATH");
    std::env::remove_var("TEST_VITALIS_DATA_PATH");
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(contents.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[application]
log_level = "debug"

[server]
host = "0.0.0.0"
port = 9000

[storage]
data_path = "patients.json"
create_if_missing = true

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "hourly"
"#;

    let temp_file = write_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.storage.data_path, "patients.json");
    assert!(config.storage.create_if_missing);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_load_minimal_config_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config("[application]\nlog_level = \"info\"\n");
    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8000);
    assert_eq!(config.storage.data_path, "data.json");
    assert!(!config.storage.create_if_missing);
    assert!(!config.logging.local_enabled);
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_VITALIS_DATA_PATH", "/var/lib/vitalis/data.json");

    let toml_content = r#"
[storage]
data_path = "${TEST_VITALIS_DATA_PATH}"
"#;

    let temp_file = write_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");
    assert_eq!(config.storage.data_path, "/var/lib/vitalis/data.json");

    cleanup_env_vars();
}

#[test]
fn test_missing_env_var_fails() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[storage]
data_path = "${VITALIS_TEST_UNSET_VARIABLE}"
"#;

    let temp_file = write_config(toml_content);
    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("VITALIS_TEST_UNSET_VARIABLE"));
}

#[test]
fn test_env_overrides_take_precedence() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("VITALIS_SERVER_PORT", "9100");
    std::env::set_var("VITALIS_STORAGE_DATA_PATH", "override.json");

    let toml_content = r#"
[server]
port = 8000

[storage]
data_path = "data.json"
"#;

    let temp_file = write_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");
    assert_eq!(config.server.port, 9100);
    assert_eq!(config.storage.data_path, "override.json");

    cleanup_env_vars();
}

#[test]
fn test_invalid_log_level_fails_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config("[application]\nlog_level = \"loud\"\n");
    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("log_level"));
}

#[test]
fn test_malformed_toml_fails() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config("this is not = toml = at all");
    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("TOML") || err.to_string().contains("parse"));
}
