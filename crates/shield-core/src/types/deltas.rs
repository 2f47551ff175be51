//! Signed count deltas and the clamp-at-zero rule.
//!
//! Every backend applies a batch in two phases: non-negative deltas are added
//! directly, negative deltas are resolved against the stored value with
//! [`clamp_decrement`]. Both phases must commit as one unit.

use super::{FxHashMap, WordCounts};

/// Class → word → signed delta. The argument of
/// `CountStore::increment_class_word_counts`.
pub type ClassDeltas = FxHashMap<String, WordCounts>;

/// Split one class's deltas into the increment phase and the decrement phase.
/// Zero deltas have no effect and are dropped. Both halves are sorted by word
/// so backends touch rows in a stable order.
pub fn split_deltas(words: &WordCounts) -> (Vec<(&str, i64)>, Vec<(&str, i64)>) {
    let mut increments = Vec::new();
    let mut decrements = Vec::new();
    for (word, &delta) in words {
        match delta {
            d if d > 0 => increments.push((word.as_str(), d)),
            d if d < 0 => decrements.push((word.as_str(), d)),
            _ => {}
        }
    }
    increments.sort_unstable();
    decrements.sort_unstable();
    (increments, decrements)
}

/// The delta actually applied for a decrement request: `max(requested, -current)`.
///
/// The result is never positive and never takes `current` below zero. A
/// stored value that is already negative (impossible for a correct store) is
/// left untouched.
pub fn clamp_decrement(requested: i64, current: i64) -> i64 {
    if current <= 0 || requested >= 0 {
        return 0;
    }
    requested.max(-current)
}

/// Sum of the positive deltas, saturating instead of overflowing.
pub fn increment_sum(increments: &[(&str, i64)]) -> i64 {
    increments
        .iter()
        .fold(0i64, |acc, (_, d)| acc.saturating_add(*d))
}
