//! ShieldErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a structured code string
/// that callers can match on without parsing messages.
pub trait ShieldErrorCode {
    /// Returns the error code string (e.g., "STORE_UNAVAILABLE").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const STORE_UNAVAILABLE: &str = "STORE_UNAVAILABLE";
pub const TX_ABORTED: &str = "TX_ABORTED";
pub const DB_BUSY: &str = "DB_BUSY";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const CORRUPT_VALUE: &str = "CORRUPT_VALUE";
pub const INVALID_CLASS: &str = "INVALID_CLASS";
pub const INVALID_TEXT: &str = "INVALID_TEXT";
pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const UNTRAINED: &str = "UNTRAINED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
