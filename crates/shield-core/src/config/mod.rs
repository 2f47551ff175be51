//! Configuration system for Shield.
//! TOML-based, layered resolution: env > project > user > defaults.

pub mod classifier_config;
pub mod redis_config;
pub mod shield_config;
pub mod storage_config;

pub use classifier_config::ClassifierConfig;
pub use redis_config::RedisConfig;
pub use shield_config::ShieldConfig;
pub use storage_config::{BackendKind, StorageConfig};
