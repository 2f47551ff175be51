//! Tests for the Shield configuration system.

use std::sync::Mutex;

use shield_core::config::{BackendKind, ShieldConfig};
use shield_core::constants::{DEFAULT_KEY_PREFIX, FLOOR_PROBABILITY};
use shield_core::errors::ConfigError;

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const SHIELD_ENV_VARS: &[&str] = &[
    "SHIELD_STORAGE_BACKEND",
    "SHIELD_STORAGE_PATH",
    "SHIELD_STORAGE_READ_POOL_SIZE",
    "SHIELD_REDIS_URL",
    "SHIELD_REDIS_KEY_PREFIX",
    "SHIELD_REDIS_POOL_SIZE",
    "SHIELD_REDIS_TIMEOUT_MS",
    "SHIELD_CLASSIFIER_FLOOR_PROBABILITY",
];

fn clear_shield_env_vars() {
    for key in SHIELD_ENV_VARS {
        std::env::remove_var(key);
    }
}

/// Points HOME at an empty directory so a developer's own
/// `~/.shield/config.toml` never leaks into a test.
fn isolated_home() -> tempfile::TempDir {
    let home = tempfile::TempDir::new().unwrap();
    std::env::set_var("HOME", home.path());
    home
}

#[test]
fn test_defaults_when_no_files() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_shield_env_vars();
    let _home = isolated_home();

    let dir = tempfile::TempDir::new().unwrap();
    let config = ShieldConfig::load(dir.path()).unwrap();

    assert_eq!(config.storage.effective_backend().unwrap(), BackendKind::Sqlite);
    assert_eq!(config.storage.effective_path().to_str(), Some("shield.db"));
    assert_eq!(config.storage.effective_read_pool_size(), 4);
    assert_eq!(config.redis.effective_key_prefix(), DEFAULT_KEY_PREFIX);
    assert_eq!(config.classifier.effective_floor_probability(), FLOOR_PROBABILITY);
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_shield_env_vars();
    let home = isolated_home();

    std::fs::create_dir_all(home.path().join(".shield")).unwrap();
    std::fs::write(
        home.path().join(".shield").join("config.toml"),
        r#"
[redis]
key_prefix = "user"
pool_size = 2
"#,
    )
    .unwrap();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("shield.toml"),
        r#"
[storage]
backend = "redis"

[redis]
key_prefix = "project"
url = "redis://10.0.0.1:6379/1"
"#,
    )
    .unwrap();

    std::env::set_var("SHIELD_REDIS_URL", "redis://env-host:6380/2");

    let config = ShieldConfig::load(dir.path()).unwrap();

    // Env beats project.
    assert_eq!(config.redis.effective_url(), "redis://env-host:6380/2");
    // Project beats user.
    assert_eq!(config.redis.effective_key_prefix(), "project");
    // User beats defaults.
    assert_eq!(config.redis.effective_pool_size(), 2);
    assert_eq!(config.storage.effective_backend().unwrap(), BackendKind::Redis);

    clear_shield_env_vars();
}

#[test]
fn test_invalid_env_values_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_shield_env_vars();
    let _home = isolated_home();

    std::env::set_var("SHIELD_REDIS_POOL_SIZE", "lots");
    let dir = tempfile::TempDir::new().unwrap();
    let config = ShieldConfig::load(dir.path()).unwrap();
    assert_eq!(config.redis.pool_size, None);

    clear_shield_env_vars();
}

#[test]
fn test_project_parse_error_is_fatal() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_shield_env_vars();
    let _home = isolated_home();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("shield.toml"), "[storage\nbackend = ").unwrap();

    let err = ShieldConfig::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }), "got {err:?}");
}

#[test]
fn test_unknown_backend_rejected() {
    let err = ShieldConfig::from_toml("[storage]\nbackend = \"etcd\"\n").unwrap_err();
    match err {
        ConfigError::UnknownBackend { name } => assert_eq!(name, "etcd"),
        other => panic!("expected UnknownBackend, got {other:?}"),
    }
}

#[test]
fn test_floor_probability_bounds() {
    for bad in ["0.0", "1.0", "-0.5", "2.0"] {
        let toml_str = format!("[classifier]\nfloor_probability = {bad}\n");
        let err = ShieldConfig::from_toml(&toml_str).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationFailed { .. }), "{bad}: {err:?}");
    }
    let ok = ShieldConfig::from_toml("[classifier]\nfloor_probability = 1e-6\n").unwrap();
    assert_eq!(ok.classifier.effective_floor_probability(), 1e-6);
}

#[test]
fn test_zero_pool_sizes_rejected() {
    assert!(ShieldConfig::from_toml("[storage]\nread_pool_size = 0\n").is_err());
    assert!(ShieldConfig::from_toml("[redis]\npool_size = 0\n").is_err());
    assert!(ShieldConfig::from_toml("[redis]\nkey_prefix = \"\"\n").is_err());
}

#[test]
fn test_read_pool_size_clamped() {
    let config = ShieldConfig::from_toml("[storage]\nread_pool_size = 64\n").unwrap();
    assert_eq!(config.storage.effective_read_pool_size(), 8);
}

#[test]
fn test_toml_roundtrip() {
    let config = ShieldConfig::from_toml(
        r#"
[storage]
backend = "sqlite"
path = "/var/lib/shield/counts.db"

[redis]
timeout_ms = 250
"#,
    )
    .unwrap();
    let rendered = config.to_toml().unwrap();
    let reparsed = ShieldConfig::from_toml(&rendered).unwrap();
    assert_eq!(reparsed.storage.path.as_deref(), Some("/var/lib/shield/counts.db"));
    assert_eq!(reparsed.redis.effective_timeout().as_millis(), 250);
}
