//! Top-level error aggregating every subsystem.

use super::error_code::ShieldErrorCode;
use super::{ClassifierError, ConfigError, StorageError};

/// Error returned by the `shield` facade.
#[derive(Debug, thiserror::Error)]
pub enum ShieldError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Classifier error: {0}")]
    Classifier(#[from] ClassifierError),
}

impl ShieldErrorCode for ShieldError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::Classifier(e) => e.error_code(),
        }
    }
}
