//! Shared constants for the Shield classifier.

/// Shield version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Substitute probability for a word never seen in a class.
/// Keeps `ln(P(word|class))` finite without smoothing the denominator.
pub const FLOOR_PROBABILITY: f64 = 1e-11;

/// Default storage backend.
pub const DEFAULT_BACKEND: &str = "sqlite";

/// Default SQLite database file, relative to the working directory.
pub const DEFAULT_SQLITE_PATH: &str = "shield.db";

/// Default number of SQLite read connections.
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

/// Upper bound on SQLite read connections.
pub const MAX_READ_POOL_SIZE: usize = 8;

/// Default Redis connection URL.
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379/0";

/// Default root for every Redis key the store owns.
pub const DEFAULT_KEY_PREFIX: &str = "shield";

/// Default number of pooled Redis connections.
pub const DEFAULT_REDIS_POOL_SIZE: usize = 4;

/// Default Redis connect/read/write timeout in milliseconds.
pub const DEFAULT_REDIS_TIMEOUT_MS: u64 = 5000;
