//! Queries for the word_counts table.

use rusqlite::{params, Connection, OptionalExtension};
use shield_core::errors::StorageError;

use crate::to_storage_err;

/// Stored count for `(class, word)`, or `None` if never recorded.
pub fn get_count(conn: &Connection, class: &str, word: &str) -> Result<Option<i64>, StorageError> {
    conn.prepare_cached("SELECT count FROM word_counts WHERE class = ?1 AND word = ?2")
        .and_then(|mut stmt| stmt.query_row(params![class, word], |row| row.get(0)).optional())
        .map_err(to_storage_err)
}

/// Add a positive amount, creating the row if needed.
pub fn increment(conn: &Connection, class: &str, word: &str, delta: i64) -> Result<(), StorageError> {
    conn.prepare_cached(
        "INSERT INTO word_counts (class, word, count) VALUES (?1, ?2, ?3)
         ON CONFLICT(class, word) DO UPDATE SET count = count + excluded.count",
    )
    .and_then(|mut stmt| stmt.execute(params![class, word, delta]))
    .map_err(to_storage_err)?;
    Ok(())
}

/// Subtract an already-clamped amount from an existing row.
pub fn decrement(conn: &Connection, class: &str, word: &str, effective: i64) -> Result<(), StorageError> {
    conn.prepare_cached("UPDATE word_counts SET count = count + ?3 WHERE class = ?1 AND word = ?2")
        .and_then(|mut stmt| stmt.execute(params![class, word, effective]))
        .map_err(to_storage_err)?;
    Ok(())
}

/// Sum of all word counts recorded for `class`.
pub fn sum_for_class(conn: &Connection, class: &str) -> Result<i64, StorageError> {
    conn.prepare_cached("SELECT COALESCE(SUM(count), 0) FROM word_counts WHERE class = ?1")
        .and_then(|mut stmt| stmt.query_row(params![class], |row| row.get(0)))
        .map_err(to_storage_err)
}

/// Number of `(class, word)` rows.
pub fn count_rows(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM word_counts", [], |row| row.get(0))
        .map_err(to_storage_err)
}
