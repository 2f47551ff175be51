//! Data model shared by the stores and the engine.

pub mod collections;
pub mod deltas;
pub mod document;

pub use collections::{BTreeMap, BTreeSet, FxHashMap, FxHashSet};
pub use deltas::{clamp_decrement, increment_sum, split_deltas, ClassDeltas};
pub use document::Document;

/// Word → count. Used both for a tokenized document (a multiset of
/// learnable units) and for per-class counts read back from a store.
pub type WordCounts = FxHashMap<String, i64>;

/// Class → `ClassTotal`, ordered by class name.
pub type ClassTotals = BTreeMap<String, i64>;

/// Class → normalized score in `[0, 1]`, ordered by class name.
pub type Scores = BTreeMap<String, f64>;
