//! Query modules, one per table.

pub mod classes;
pub mod word_counts;
