//! CountStore trait: the transactional counting layer.
//!
//! Backends own all mutable classification state: the class set, the
//! per-(class, word) counts, and the per-class totals. The engine never
//! touches state except through these calls, so it can be shared freely
//! across threads as long as the store is.

use std::collections::BTreeSet;

use crate::errors::StorageError;
use crate::types::{ClassDeltas, ClassTotals, WordCounts};

/// A transactional store of per-class word counts.
///
/// Implementations must hold these invariants after every completed call,
/// and never let a reader observe them broken mid-call:
///
/// 1. every word count is `>= 0`;
/// 2. every class total equals the sum of that class's word counts;
/// 3. a class is in the class set no later than its first recorded count.
///
/// Each method is one atomic unit. A mutating call that returns `Err` has
/// no observable effect.
pub trait CountStore: Send + Sync {
    /// Short backend identifier for logs ("sqlite", "redis").
    fn backend_name(&self) -> &'static str;

    /// Register `class`. Idempotent. Fails with `StorageError::InvalidClass`
    /// if `class` is empty.
    fn add_class(&self, class: &str) -> Result<(), StorageError>;

    /// Snapshot of every registered class.
    fn classes(&self) -> Result<BTreeSet<String>, StorageError>;

    /// Current count of each requested word within `class`. Unknown words and
    /// unknown classes report `0`; every requested word is present in the
    /// result.
    fn class_word_counts(&self, class: &str, words: &[String])
        -> Result<WordCounts, StorageError>;

    /// Apply every `(class, word, delta)` triple as one atomic unit.
    ///
    /// Positive deltas apply in full. A negative delta is clamped so the count
    /// never drops below zero: the effective delta is
    /// `max(requested, -current)`, and the class total moves by the same
    /// effective amount. Classes receiving positive deltas are registered in
    /// the same unit.
    fn increment_class_word_counts(&self, deltas: &ClassDeltas) -> Result<(), StorageError>;

    /// Snapshot of the total for every registered class (`0` for a class
    /// without learned words).
    fn total_class_word_counts(&self) -> Result<ClassTotals, StorageError>;

    /// Atomically drop every class, count, and total.
    fn reset(&self) -> Result<(), StorageError>;
}
