//! Top-level Shield configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ClassifierConfig, RedisConfig, StorageConfig};
use crate::errors::ConfigError;

/// Project-level config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "shield.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SHIELD_*`)
/// 2. Project config (`shield.toml` in project root)
/// 3. User config (`~/.shield/config.toml`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ShieldConfig {
    pub storage: StorageConfig,
    pub redis: RedisConfig,
    pub classifier: ClassifierConfig,
}

impl ShieldConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config. Unreadable files are skipped, invalid
        // TOML is not.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(path = %user_config_path.display(), error = %e, "skipping user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &ShieldConfig) -> Result<(), ConfigError> {
        config.storage.effective_backend()?;

        if let Some(size) = config.storage.read_pool_size {
            if size == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "storage.read_pool_size".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(ref path) = config.storage.path {
            if path.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "storage.path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(size) = config.redis.pool_size {
            if size == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "redis.pool_size".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(ref prefix) = config.redis.key_prefix {
            if prefix.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "redis.key_prefix".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(floor) = config.classifier.floor_probability {
            if !(floor > 0.0 && floor < 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "classifier.floor_probability".to_string(),
                    message: "must be strictly between 0.0 and 1.0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.shield/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".shield").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are ignored.
    fn merge_toml_file(config: &mut ShieldConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ShieldConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a `Some`.
    fn merge(base: &mut ShieldConfig, other: &ShieldConfig) {
        // Storage
        if other.storage.backend.is_some() {
            base.storage.backend = other.storage.backend.clone();
        }
        if other.storage.path.is_some() {
            base.storage.path = other.storage.path.clone();
        }
        if other.storage.read_pool_size.is_some() {
            base.storage.read_pool_size = other.storage.read_pool_size;
        }

        // Redis
        if other.redis.url.is_some() {
            base.redis.url = other.redis.url.clone();
        }
        if other.redis.key_prefix.is_some() {
            base.redis.key_prefix = other.redis.key_prefix.clone();
        }
        if other.redis.pool_size.is_some() {
            base.redis.pool_size = other.redis.pool_size;
        }
        if other.redis.timeout_ms.is_some() {
            base.redis.timeout_ms = other.redis.timeout_ms;
        }

        // Classifier
        if other.classifier.floor_probability.is_some() {
            base.classifier.floor_probability = other.classifier.floor_probability;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `SHIELD_STORAGE_BACKEND`, `SHIELD_REDIS_URL`, etc.
    /// Values that fail to parse are ignored.
    fn apply_env_overrides(config: &mut ShieldConfig) {
        if let Ok(val) = std::env::var("SHIELD_STORAGE_BACKEND") {
            config.storage.backend = Some(val);
        }
        if let Ok(val) = std::env::var("SHIELD_STORAGE_PATH") {
            config.storage.path = Some(val);
        }
        if let Ok(val) = std::env::var("SHIELD_STORAGE_READ_POOL_SIZE") {
            if let Ok(v) = val.parse::<usize>() {
                config.storage.read_pool_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SHIELD_REDIS_URL") {
            config.redis.url = Some(val);
        }
        if let Ok(val) = std::env::var("SHIELD_REDIS_KEY_PREFIX") {
            config.redis.key_prefix = Some(val);
        }
        if let Ok(val) = std::env::var("SHIELD_REDIS_POOL_SIZE") {
            if let Ok(v) = val.parse::<usize>() {
                config.redis.pool_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SHIELD_REDIS_TIMEOUT_MS") {
            if let Ok(v) = val.parse::<u64>() {
                config.redis.timeout_ms = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SHIELD_CLASSIFIER_FLOOR_PROBABILITY") {
            if let Ok(v) = val.parse::<f64>() {
                config.classifier.floor_probability = Some(v);
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
