//! RedisPool: round-robin blocking connections.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use redis::{Client, Connection, RedisResult};
use shield_core::errors::StorageError;

use crate::errors::{is_broken_connection, to_storage_err};

/// A fixed set of Redis connections with round-robin selection. A connection
/// that fails at the transport level is replaced on the spot, so one dropped
/// socket does not poison its slot.
pub struct RedisPool {
    client: Client,
    connections: Vec<Mutex<Connection>>,
    next: AtomicUsize,
    timeout: Duration,
}

impl RedisPool {
    /// Connect `pool_size` (at least 1) connections to `url`.
    pub fn open(url: &str, pool_size: usize, timeout: Duration) -> Result<Self, StorageError> {
        let client = Client::open(url).map_err(to_storage_err)?;
        let size = pool_size.max(1);
        let mut connections = Vec::with_capacity(size);
        for _ in 0..size {
            connections.push(Mutex::new(connect(&client, timeout)?));
        }
        Ok(Self {
            client,
            connections,
            next: AtomicUsize::new(0),
            timeout,
        })
    }

    /// Execute a closure with a pooled connection (round-robin).
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&mut Connection) -> RedisResult<T>,
    {
        let idx = self.next.fetch_add(1, Ordering::Relaxed) % self.connections.len();
        let mut guard = self.connections[idx]
            .lock()
            .map_err(|_| StorageError::RedisError {
                message: "connection pool lock poisoned".to_string(),
            })?;

        match f(&mut guard) {
            Ok(value) => Ok(value),
            Err(e) => {
                if is_broken_connection(&e) {
                    match connect(&self.client, self.timeout) {
                        Ok(fresh) => {
                            *guard = fresh;
                            tracing::warn!(slot = idx, error = %e, "replaced broken redis connection");
                        }
                        Err(reconnect) => {
                            tracing::warn!(slot = idx, error = %reconnect, "redis reconnect failed");
                        }
                    }
                }
                Err(to_storage_err(e))
            }
        }
    }

    /// Number of connections in the pool.
    pub fn size(&self) -> usize {
        self.connections.len()
    }
}

fn connect(client: &Client, timeout: Duration) -> Result<Connection, StorageError> {
    let conn = client
        .get_connection_with_timeout(timeout)
        .map_err(to_storage_err)?;
    conn.set_read_timeout(Some(timeout)).map_err(to_storage_err)?;
    conn.set_write_timeout(Some(timeout)).map_err(to_storage_err)?;
    Ok(conn)
}
