//! Storage backend selection and SQLite settings.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BACKEND, DEFAULT_READ_POOL_SIZE, DEFAULT_SQLITE_PATH, MAX_READ_POOL_SIZE,
};
use crate::errors::ConfigError;

/// Which `CountStore` implementation to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Sqlite,
    Redis,
}

impl FromStr for BackendKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "redis" => Ok(Self::Redis),
            other => Err(ConfigError::UnknownBackend {
                name: other.to_string(),
            }),
        }
    }
}

/// Configuration for the counting store.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// "sqlite" or "redis". Default: "sqlite".
    pub backend: Option<String>,
    /// SQLite database file. Default: `shield.db`.
    pub path: Option<String>,
    /// SQLite read connections (1–8). Default: 4.
    pub read_pool_size: Option<usize>,
}

impl StorageConfig {
    /// Returns the configured backend, defaulting to SQLite.
    pub fn effective_backend(&self) -> Result<BackendKind, ConfigError> {
        self.backend.as_deref().unwrap_or(DEFAULT_BACKEND).parse()
    }

    /// Returns the SQLite path, defaulting to `shield.db`.
    pub fn effective_path(&self) -> PathBuf {
        PathBuf::from(self.path.as_deref().unwrap_or(DEFAULT_SQLITE_PATH))
    }

    /// Returns the read pool size clamped to 1–8, defaulting to 4.
    pub fn effective_read_pool_size(&self) -> usize {
        self.read_pool_size
            .unwrap_or(DEFAULT_READ_POOL_SIZE)
            .clamp(1, MAX_READ_POOL_SIZE)
    }
}
