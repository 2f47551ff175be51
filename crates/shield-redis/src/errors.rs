//! Mapping from `redis::RedisError` onto the shared storage taxonomy.

use redis::{ErrorKind, RedisError};
use shield_core::errors::StorageError;

/// Error code our scripts raise when a stored field is not an integer.
pub const CORRUPT_CODE: &str = "CORRUPT";

/// Error code our scripts raise when a batch would leave the exact-integer
/// range of the Lua interpreter.
pub const OVERFLOW_CODE: &str = "OVERFLOW";

/// Transport failures become `Unavailable`, aborted `EXEC`s become
/// `TransactionAborted`, script-detected corruption becomes `CorruptValue`.
pub fn to_storage_err(e: RedisError) -> StorageError {
    if e.is_connection_refusal() || e.is_connection_dropped() || e.is_timeout() || e.is_io_error()
    {
        return StorageError::Unavailable {
            message: e.to_string(),
        };
    }
    if e.kind() == ErrorKind::ExecAbortError {
        return StorageError::TransactionAborted {
            message: e.to_string(),
        };
    }
    if e.code() == Some(CORRUPT_CODE) {
        return StorageError::CorruptValue {
            key: e.detail().unwrap_or_default().to_string(),
            message: "stored value is not an integer".to_string(),
        };
    }
    StorageError::RedisError {
        message: e.to_string(),
    }
}

/// True when the connection that produced `e` should be replaced.
pub(crate) fn is_broken_connection(e: &RedisError) -> bool {
    e.is_connection_dropped() || e.is_io_error() || e.is_timeout()
}
