//! RedisStore: the networked `CountStore`.

use std::collections::{BTreeSet, HashMap};
use std::time::Duration;

use redis::Commands;
use shield_core::config::RedisConfig;
use shield_core::errors::StorageError;
use shield_core::traits::CountStore;
use shield_core::types::{split_deltas, ClassDeltas, ClassTotals, WordCounts};

use crate::keys::KeySpace;
use crate::pool::RedisPool;
use crate::scripts::{self, LUA_MAX_EXACT};

/// Counting store on a Redis server.
pub struct RedisStore {
    pool: RedisPool,
    keys: KeySpace,
}

impl RedisStore {
    /// Connect to `url` and own every key under `prefix`.
    pub fn connect(
        url: &str,
        prefix: &str,
        pool_size: usize,
        timeout: Duration,
    ) -> Result<Self, StorageError> {
        if prefix.is_empty() {
            return Err(StorageError::RedisError {
                message: "key prefix must not be empty".to_string(),
            });
        }
        let pool = RedisPool::open(url, pool_size, timeout)?;
        tracing::info!(prefix, connections = pool.size(), "connected redis store");
        Ok(Self {
            pool,
            keys: KeySpace::new(prefix),
        })
    }

    /// Connect using `config`.
    pub fn from_config(config: &RedisConfig) -> Result<Self, StorageError> {
        Self::connect(
            config.effective_url(),
            config.effective_key_prefix(),
            config.effective_pool_size(),
            config.effective_timeout(),
        )
    }

    pub fn keys(&self) -> &KeySpace {
        &self.keys
    }

    /// Round-trip a `PING`.
    pub fn ping(&self) -> Result<(), StorageError> {
        self.pool
            .with_conn(|conn| redis::cmd("PING").query::<String>(conn))
            .map(|_| ())
    }

    /// Drop every pooled connection.
    pub fn close(self) -> Result<(), StorageError> {
        tracing::debug!(prefix = self.keys.prefix(), "closing redis store");
        drop(self.pool);
        Ok(())
    }
}

impl CountStore for RedisStore {
    fn backend_name(&self) -> &'static str {
        "redis"
    }

    fn add_class(&self, class: &str) -> Result<(), StorageError> {
        if class.is_empty() {
            return Err(StorageError::InvalidClass {
                class: class.to_string(),
            });
        }
        let key = self.keys.classes();
        self.pool
            .with_conn(|conn| conn.sadd::<_, _, i64>(&key, class))
            .map(|_| ())
    }

    fn classes(&self) -> Result<BTreeSet<String>, StorageError> {
        let key = self.keys.classes();
        self.pool.with_conn(|conn| conn.smembers(&key))
    }

    fn class_word_counts(&self, class: &str, words: &[String]) -> Result<WordCounts, StorageError> {
        let mut counts = WordCounts::default();
        if words.is_empty() {
            return Ok(counts);
        }
        let key = self.keys.class(class);
        // One HMGET reads every field from the same instant.
        let raw: Vec<Option<String>> = self
            .pool
            .with_conn(|conn| redis::cmd("HMGET").arg(&key).arg(words).query(conn))?;
        for (word, value) in words.iter().zip(raw) {
            counts.insert(word.clone(), parse_count(&key, value)?);
        }
        Ok(counts)
    }

    fn increment_class_word_counts(&self, deltas: &ClassDeltas) -> Result<(), StorageError> {
        let mut class_names: Vec<&String> = deltas.keys().collect();
        class_names.sort_unstable();

        let mut invocation = scripts::INCREMENT.prepare_invoke();
        invocation.key(self.keys.classes()).key(self.keys.sum());
        let mut args: Vec<String> = Vec::new();
        let mut planned = 0usize;

        for class in class_names {
            let (inc, dec) = split_deltas(&deltas[class]);
            if inc.is_empty() && dec.is_empty() {
                continue;
            }
            if class.is_empty() && !inc.is_empty() {
                return Err(StorageError::InvalidClass {
                    class: class.clone(),
                });
            }
            invocation.key(self.keys.class(class));
            args.push(class.clone());
            args.push((inc.len() + dec.len()).to_string());
            for (word, delta) in inc.iter().chain(dec.iter()) {
                if delta.abs() > LUA_MAX_EXACT {
                    return Err(StorageError::RedisError {
                        message: format!("delta {delta} for {class:?}/{word:?} is out of range"),
                    });
                }
                args.push((*word).to_string());
                args.push(delta.to_string());
            }
            planned += 1;
        }

        if planned == 0 {
            return Ok(());
        }
        invocation.arg(planned);
        for arg in &args {
            invocation.arg(arg);
        }

        let (increments, decrements, clamped): (i64, i64, i64) =
            self.pool.with_conn(|conn| invocation.invoke(conn))?;
        tracing::debug!(
            classes = planned,
            increments,
            decrements,
            clamped,
            "applied count batch"
        );
        Ok(())
    }

    fn total_class_word_counts(&self) -> Result<ClassTotals, StorageError> {
        let classes_key = self.keys.classes();
        let sum_key = self.keys.sum();
        let (classes, sums): (Vec<String>, HashMap<String, String>) = self.pool.with_conn(|conn| {
            redis::pipe()
                .atomic()
                .smembers(&classes_key)
                .hgetall(&sum_key)
                .query(conn)
        })?;

        let mut totals = ClassTotals::new();
        for class in classes {
            let total = parse_count(&sum_key, sums.get(&class).cloned())?;
            totals.insert(class, total);
        }
        Ok(totals)
    }

    fn reset(&self) -> Result<(), StorageError> {
        let dropped: i64 = self.pool.with_conn(|conn| {
            scripts::RESET
                .key(self.keys.classes())
                .key(self.keys.sum())
                .arg(self.keys.class_prefix())
                .invoke(conn)
        })?;
        tracing::info!(backend = "redis", prefix = self.keys.prefix(), classes = dropped, "store reset");
        Ok(())
    }
}

fn parse_count(key: &str, value: Option<String>) -> Result<i64, StorageError> {
    match value {
        None => Ok(0),
        Some(raw) => raw.parse().map_err(|_| StorageError::CorruptValue {
            key: key.to_string(),
            message: format!("expected an integer, found {raw:?}"),
        }),
    }
}
