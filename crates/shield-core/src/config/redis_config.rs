//! Redis connection settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_KEY_PREFIX, DEFAULT_REDIS_POOL_SIZE, DEFAULT_REDIS_TIMEOUT_MS, DEFAULT_REDIS_URL,
};

/// Configuration for the Redis-backed store.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RedisConfig {
    /// Connection URL. Default: `redis://127.0.0.1:6379/0`.
    pub url: Option<String>,
    /// Root of every key the store owns. Default: `shield`.
    pub key_prefix: Option<String>,
    /// Pooled connections. Default: 4.
    pub pool_size: Option<usize>,
    /// Connect, read and write timeout in milliseconds. Default: 5000.
    pub timeout_ms: Option<u64>,
}

impl RedisConfig {
    pub fn effective_url(&self) -> &str {
        self.url.as_deref().unwrap_or(DEFAULT_REDIS_URL)
    }

    pub fn effective_key_prefix(&self) -> &str {
        self.key_prefix.as_deref().unwrap_or(DEFAULT_KEY_PREFIX)
    }

    pub fn effective_pool_size(&self) -> usize {
        self.pool_size.unwrap_or(DEFAULT_REDIS_POOL_SIZE).max(1)
    }

    pub fn effective_timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms.unwrap_or(DEFAULT_REDIS_TIMEOUT_MS))
    }
}
