//! # shield-storage
//!
//! Embedded counting store on SQLite. One serialized writer connection runs
//! every mutation inside a `BEGIN IMMEDIATE` transaction; a pool of
//! read-only connections serves reads under WAL.

pub mod connection;
pub mod migrations;
pub mod queries;
pub mod store;

pub use connection::DatabaseManager;
pub use store::SqliteStore;

use rusqlite::ErrorCode;
use shield_core::errors::StorageError;

/// Map a rusqlite error onto the shared storage taxonomy.
/// Lock contention becomes `DbBusy`; everything else keeps its message.
pub(crate) fn to_storage_err(e: rusqlite::Error) -> StorageError {
    match e.sqlite_error_code() {
        Some(ErrorCode::DatabaseBusy) | Some(ErrorCode::DatabaseLocked) => StorageError::DbBusy,
        _ => StorageError::SqliteError {
            message: e.to_string(),
        },
    }
}
