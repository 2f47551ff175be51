//! Shield: a configured store, tokenizer and classifier bundled together.

use std::sync::Arc;

use shield_classifier::Classifier;
use shield_core::config::{BackendKind, ShieldConfig};
use shield_core::errors::{ShieldError, StorageError};
use shield_core::traits::{CountStore, Tokenizer};
use shield_core::types::{Document, Scores};
use shield_redis::RedisStore;
use shield_storage::SqliteStore;
use shield_tokens::EnglishTokenizer;

/// The concrete store behind a `Shield`, kept so `close` can shut it down.
enum Backend {
    Sqlite(Arc<SqliteStore>),
    Redis(Arc<RedisStore>),
}

impl Backend {
    fn open(config: &ShieldConfig) -> Result<Self, ShieldError> {
        ShieldConfig::validate(config)?;
        let backend = match config.storage.effective_backend()? {
            BackendKind::Sqlite => Self::Sqlite(Arc::new(SqliteStore::from_config(&config.storage)?)),
            BackendKind::Redis => Self::Redis(Arc::new(RedisStore::from_config(&config.redis)?)),
        };
        Ok(backend)
    }

    fn store(&self) -> Arc<dyn CountStore> {
        match self {
            Self::Sqlite(store) => store.clone(),
            Self::Redis(store) => store.clone(),
        }
    }

    fn close(self) -> Result<(), StorageError> {
        match self {
            Self::Sqlite(store) => match Arc::try_unwrap(store) {
                Ok(store) => store.close(),
                Err(_) => {
                    tracing::warn!("sqlite store still shared; skipping close");
                    Ok(())
                }
            },
            Self::Redis(store) => match Arc::try_unwrap(store) {
                Ok(store) => store.close(),
                Err(_) => {
                    tracing::warn!("redis store still shared; skipping close");
                    Ok(())
                }
            },
        }
    }
}

/// Open the counting store selected by `config.storage.backend`.
pub fn open_store(config: &ShieldConfig) -> Result<Arc<dyn CountStore>, ShieldError> {
    Ok(Backend::open(config)?.store())
}

/// A ready-to-use classifier over the configured backend.
pub struct Shield {
    classifier: Classifier,
    backend: Backend,
}

impl Shield {
    /// Open the configured store with the English tokenizer.
    pub fn open(config: &ShieldConfig) -> Result<Self, ShieldError> {
        Self::open_with_tokenizer(config, Arc::new(EnglishTokenizer::new()))
    }

    /// Open the configured store with a caller-supplied tokenizer.
    pub fn open_with_tokenizer(
        config: &ShieldConfig,
        tokenizer: Arc<dyn Tokenizer>,
    ) -> Result<Self, ShieldError> {
        let backend = Backend::open(config)?;
        let classifier = Classifier::new(backend.store(), tokenizer)
            .with_floor_probability(config.classifier.effective_floor_probability());
        tracing::info!(
            backend = classifier.store().backend_name(),
            tokenizer = classifier.tokenizer().name(),
            "shield opened"
        );
        Ok(Self {
            classifier,
            backend,
        })
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn store(&self) -> &Arc<dyn CountStore> {
        self.classifier.store()
    }

    pub fn learn(&self, class: &str, text: &str) -> Result<(), ShieldError> {
        Ok(self.classifier.learn(class, text)?)
    }

    pub fn bulk_learn(&self, documents: &[Document]) -> Result<(), ShieldError> {
        Ok(self.classifier.bulk_learn(documents)?)
    }

    pub fn forget(&self, class: &str, text: &str) -> Result<(), ShieldError> {
        Ok(self.classifier.forget(class, text)?)
    }

    pub fn bulk_forget(&self, documents: &[Document]) -> Result<(), ShieldError> {
        Ok(self.classifier.bulk_forget(documents)?)
    }

    pub fn score(&self, text: &str) -> Result<Scores, ShieldError> {
        Ok(self.classifier.score(text)?)
    }

    pub fn classify(&self, text: &str) -> Result<String, ShieldError> {
        Ok(self.classifier.classify(text)?)
    }

    pub fn reset(&self) -> Result<(), ShieldError> {
        Ok(self.classifier.reset()?)
    }

    /// Release the classifier and close the store. Stores still shared
    /// through `store()` clones are dropped instead of closed.
    pub fn close(self) -> Result<(), ShieldError> {
        let Self {
            classifier,
            backend,
        } = self;
        drop(classifier);
        backend.close()?;
        Ok(())
    }
}
