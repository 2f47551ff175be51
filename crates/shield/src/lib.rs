//! # shield
//!
//! Online Naive Bayes text classification. Open a [`Shield`] from a
//! [`ShieldConfig`], teach it labelled text, and ask it which class new text
//! belongs to:
//!
//! ```no_run
//! use shield::{Shield, ShieldConfig};
//!
//! let shield = Shield::open(&ShieldConfig::default())?;
//! shield.learn("good", "sunshine drugs love sex lobster sloth")?;
//! shield.learn("bad", "fear death horror government zombie god")?;
//! assert_eq!(shield.classify("sloths are so cute i love them")?, "good");
//! # Ok::<(), shield::ShieldError>(())
//! ```

pub mod handle;

pub use handle::{open_store, Shield};

pub use shield_classifier::Classifier;
pub use shield_core::config::{BackendKind, ShieldConfig};
pub use shield_core::errors::{ClassifierError, ConfigError, ShieldError, StorageError};
pub use shield_core::tracing::init_tracing;
pub use shield_core::traits::{CountStore, Tokenizer};
pub use shield_core::types::{ClassDeltas, ClassTotals, Document, Scores, WordCounts};
pub use shield_redis::RedisStore;
pub use shield_storage::SqliteStore;
pub use shield_tokens::{EnglishTokenizer, WordTokenizer};
