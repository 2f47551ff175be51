//! Queries for the classes table: the class set and per-class totals.

use rusqlite::{params, Connection};
use shield_core::errors::StorageError;

use crate::to_storage_err;

/// Register a class. No-op if it already exists.
pub fn insert_class(conn: &Connection, name: &str) -> Result<(), StorageError> {
    conn.prepare_cached("INSERT INTO classes (name) VALUES (?1) ON CONFLICT(name) DO NOTHING")
        .and_then(|mut stmt| stmt.execute(params![name]))
        .map_err(to_storage_err)?;
    Ok(())
}

/// All class names, sorted.
pub fn list_classes(conn: &Connection) -> Result<Vec<String>, StorageError> {
    let mut stmt = conn
        .prepare_cached("SELECT name FROM classes ORDER BY name")
        .map_err(to_storage_err)?;
    let rows = stmt
        .query_map([], |row| row.get(0))
        .map_err(to_storage_err)?;
    rows.collect::<Result<Vec<String>, _>>()
        .map_err(to_storage_err)
}

/// `(class, total)` for every class, sorted by class.
pub fn list_totals(conn: &Connection) -> Result<Vec<(String, i64)>, StorageError> {
    let mut stmt = conn
        .prepare_cached("SELECT name, total FROM classes ORDER BY name")
        .map_err(to_storage_err)?;
    let rows = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .map_err(to_storage_err)?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(to_storage_err)
}

/// Add a signed amount to a class total. The CHECK constraint rejects any
/// update that would make the total negative.
pub fn add_to_total(conn: &Connection, name: &str, delta: i64) -> Result<(), StorageError> {
    conn.prepare_cached("UPDATE classes SET total = total + ?2 WHERE name = ?1")
        .and_then(|mut stmt| stmt.execute(params![name, delta]))
        .map_err(to_storage_err)?;
    Ok(())
}

/// Delete every class; word counts follow through ON DELETE CASCADE, but are
/// deleted explicitly first so the reset does not depend on foreign_keys.
pub fn delete_all(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch("DELETE FROM word_counts; DELETE FROM classes;")
        .map_err(to_storage_err)
}

/// Number of registered classes.
pub fn count(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM classes", [], |row| row.get(0))
        .map_err(to_storage_err)
}
