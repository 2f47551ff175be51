//! SqliteStore: the embedded `CountStore`.

use std::collections::BTreeSet;
use std::path::Path;

use shield_core::config::StorageConfig;
use shield_core::errors::StorageError;
use shield_core::traits::CountStore;
use shield_core::types::{
    clamp_decrement, increment_sum, split_deltas, ClassDeltas, ClassTotals, WordCounts,
};

use crate::connection::writer::{with_immediate_transaction, with_read_snapshot};
use crate::connection::DatabaseManager;
use crate::queries::{classes, word_counts};

/// What one `increment_class_word_counts` call actually changed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    pub increments: usize,
    pub decrements: usize,
    /// Decrements whose effective delta was smaller than requested.
    pub clamped: usize,
}

/// A class whose stored total disagrees with the sum of its word counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalMismatch {
    pub class: String,
    pub stored_total: i64,
    pub word_sum: i64,
}

/// Counting store on a SQLite database file (or in memory).
pub struct SqliteStore {
    db: DatabaseManager,
}

impl SqliteStore {
    /// Open or create the database at `path`.
    pub fn open(path: &Path, read_pool_size: usize) -> Result<Self, StorageError> {
        let db = DatabaseManager::open(path, read_pool_size)?;
        tracing::info!(path = %path.display(), readers = db.read_pool_size(), "opened sqlite store");
        Ok(Self { db })
    }

    /// Open the database described by `config`.
    pub fn from_config(config: &StorageConfig) -> Result<Self, StorageError> {
        Self::open(&config.effective_path(), config.effective_read_pool_size())
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Ok(Self {
            db: DatabaseManager::open_in_memory()?,
        })
    }

    /// The underlying connection manager.
    pub fn database(&self) -> &DatabaseManager {
        &self.db
    }

    /// Flush and close the database.
    pub fn close(self) -> Result<(), StorageError> {
        self.db.close()
    }

    /// Apply a batch and report what changed. Same contract as
    /// `CountStore::increment_class_word_counts`.
    pub fn apply_deltas(&self, deltas: &ClassDeltas) -> Result<BatchStats, StorageError> {
        let mut class_names: Vec<&String> = deltas.keys().collect();
        class_names.sort_unstable();

        let plans: Vec<_> = class_names
            .into_iter()
            .map(|class| {
                let (inc, dec) = split_deltas(&deltas[class]);
                (class.as_str(), inc, dec)
            })
            .filter(|(_, inc, dec)| !inc.is_empty() || !dec.is_empty())
            .collect();

        if plans.is_empty() {
            return Ok(BatchStats::default());
        }
        if let Some((class, _, _)) = plans.iter().find(|(c, inc, _)| c.is_empty() && !inc.is_empty()) {
            return Err(StorageError::InvalidClass {
                class: class.to_string(),
            });
        }

        let stats = self.db.with_writer(|conn| {
            with_immediate_transaction(conn, |tx| {
                let mut stats = BatchStats::default();

                // Phase 1: non-negative deltas apply in full.
                for (class, inc, _) in &plans {
                    if inc.is_empty() {
                        continue;
                    }
                    classes::insert_class(tx, class)?;
                    for (word, delta) in inc {
                        word_counts::increment(tx, class, word, *delta)?;
                    }
                    classes::add_to_total(tx, class, increment_sum(inc))?;
                    stats.increments += inc.len();
                }

                // Phase 2: negative deltas are clamped against the value read
                // inside this same transaction.
                for (class, _, dec) in &plans {
                    let mut class_delta = 0i64;
                    for (word, requested) in dec {
                        let current = word_counts::get_count(tx, class, word)?.unwrap_or(0);
                        let effective = clamp_decrement(*requested, current);
                        if effective != *requested {
                            stats.clamped += 1;
                        }
                        if effective != 0 {
                            word_counts::decrement(tx, class, word, effective)?;
                            class_delta += effective;
                        }
                    }
                    if class_delta != 0 {
                        classes::add_to_total(tx, class, class_delta)?;
                    }
                    stats.decrements += dec.len();
                }

                Ok(stats)
            })
        })?;

        tracing::debug!(
            classes = plans.len(),
            increments = stats.increments,
            decrements = stats.decrements,
            clamped = stats.clamped,
            "applied count batch"
        );
        Ok(stats)
    }

    /// Compare every class total with the sum of its word counts, in one
    /// read snapshot. An empty result means every total matches.
    pub fn verify_totals(&self) -> Result<Vec<TotalMismatch>, StorageError> {
        self.db.with_reader(|conn| {
            with_read_snapshot(conn, |conn| {
                let mut mismatches = Vec::new();
                for (class, stored_total) in classes::list_totals(conn)? {
                    let word_sum = word_counts::sum_for_class(conn, &class)?;
                    if word_sum != stored_total {
                        mismatches.push(TotalMismatch {
                            class,
                            stored_total,
                            word_sum,
                        });
                    }
                }
                Ok(mismatches)
            })
        })
    }
}

impl CountStore for SqliteStore {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    fn add_class(&self, class: &str) -> Result<(), StorageError> {
        if class.is_empty() {
            return Err(StorageError::InvalidClass {
                class: class.to_string(),
            });
        }
        self.db.with_writer(|conn| classes::insert_class(conn, class))
    }

    fn classes(&self) -> Result<BTreeSet<String>, StorageError> {
        let names = self.db.with_reader(classes::list_classes)?;
        Ok(names.into_iter().collect())
    }

    fn class_word_counts(&self, class: &str, words: &[String]) -> Result<WordCounts, StorageError> {
        self.db.with_reader(|conn| {
            with_read_snapshot(conn, |conn| {
                let mut counts = WordCounts::default();
                for word in words {
                    let count = word_counts::get_count(conn, class, word)?.unwrap_or(0);
                    counts.insert(word.clone(), count);
                }
                Ok(counts)
            })
        })
    }

    fn increment_class_word_counts(&self, deltas: &ClassDeltas) -> Result<(), StorageError> {
        self.apply_deltas(deltas).map(|_| ())
    }

    fn total_class_word_counts(&self) -> Result<ClassTotals, StorageError> {
        let totals = self.db.with_reader(classes::list_totals)?;
        Ok(totals.into_iter().collect())
    }

    fn reset(&self) -> Result<(), StorageError> {
        self.db.with_writer(|conn| with_immediate_transaction(conn, |tx| classes::delete_all(tx)))?;
        tracing::info!(backend = "sqlite", "store reset");
        Ok(())
    }
}
