//! Write transactions: BEGIN IMMEDIATE, auto-rollback on error.

use rusqlite::{Connection, Transaction, TransactionBehavior};
use shield_core::errors::StorageError;

use crate::to_storage_err;

/// Run `f` inside a `BEGIN IMMEDIATE` transaction.
///
/// The database write lock is taken at `BEGIN`, so every read `f` performs is
/// serialized against all other writers until commit. If `f` fails, the
/// transaction is rolled back on drop and nothing it wrote is visible.
pub fn with_immediate_transaction<F, T>(conn: &Connection, f: F) -> Result<T, StorageError>
where
    F: FnOnce(&Transaction<'_>) -> Result<T, StorageError>,
{
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)
        .map_err(to_storage_err)?;

    let result = f(&tx)?;

    tx.commit().map_err(|e| match to_storage_err(e) {
        StorageError::DbBusy => StorageError::DbBusy,
        other => StorageError::TransactionAborted {
            message: format!("commit failed: {other}"),
        },
    })?;

    Ok(result)
}

/// Run `f` inside a deferred read transaction, so every statement it issues
/// sees the same committed snapshot.
pub fn with_read_snapshot<F, T>(conn: &Connection, f: F) -> Result<T, StorageError>
where
    F: FnOnce(&Connection) -> Result<T, StorageError>,
{
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Deferred)
        .map_err(to_storage_err)?;
    let result = f(&tx)?;
    tx.commit().map_err(to_storage_err)?;
    Ok(result)
}
