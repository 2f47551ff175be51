//! # shield-core
//!
//! Foundation crate for the Shield classifier.
//! Defines the shared types, the counting-store and tokenizer traits, errors,
//! config, tracing setup, and constants. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::ShieldConfig;
pub use errors::{ClassifierError, ConfigError, ShieldError, StorageError};
pub use traits::{CountStore, Tokenizer};
pub use types::{ClassDeltas, ClassTotals, Document, Scores, WordCounts};
