//! Counting-store errors, shared by every backend.

use super::error_code::{self, ShieldErrorCode};

/// Errors raised by a `CountStore` implementation.
///
/// A store that returns any of these from a mutating call has rolled the
/// whole call back.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("Redis error: {message}")]
    RedisError { message: String },

    #[error("Migration failed at version {version}: {message}")]
    MigrationFailed { version: u32, message: String },

    #[error("Database busy")]
    DbBusy,

    #[error("Store unavailable: {message}")]
    Unavailable { message: String },

    #[error("Transaction aborted: {message}")]
    TransactionAborted { message: String },

    #[error("Invalid class: {class:?}")]
    InvalidClass { class: String },

    #[error("Corrupt value under {key}: {message}")]
    CorruptValue { key: String, message: String },
}

impl StorageError {
    /// True for failures a caller may reasonably retry (transport loss,
    /// lock contention, aborted transactions).
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::DbBusy | Self::Unavailable { .. } | Self::TransactionAborted { .. }
        )
    }
}

impl ShieldErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SqliteError { .. } | Self::RedisError { .. } => error_code::STORAGE_ERROR,
            Self::MigrationFailed { .. } => error_code::MIGRATION_FAILED,
            Self::DbBusy => error_code::DB_BUSY,
            Self::Unavailable { .. } => error_code::STORE_UNAVAILABLE,
            Self::TransactionAborted { .. } => error_code::TX_ABORTED,
            Self::InvalidClass { .. } => error_code::INVALID_CLASS,
            Self::CorruptValue { .. } => error_code::CORRUPT_VALUE,
        }
    }
}
