//! Classifier: learn, forget, score, classify.

use std::sync::Arc;

use shield_core::constants::FLOOR_PROBABILITY;
use shield_core::errors::ClassifierError;
use shield_core::traits::{CountStore, Tokenizer};
use shield_core::types::{BTreeMap, ClassDeltas, Document, Scores, WordCounts};

use crate::scoring::{best_class, log_likelihood, normalize};

/// Naive Bayes text classifier over a shared counting store.
///
/// Every mutation is exactly one `increment_class_word_counts` call, so a
/// batch of documents is applied to the store all at once or not at all.
pub struct Classifier {
    store: Arc<dyn CountStore>,
    tokenizer: Arc<dyn Tokenizer>,
    floor: f64,
}

impl Classifier {
    pub fn new(store: Arc<dyn CountStore>, tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self {
            store,
            tokenizer,
            floor: FLOOR_PROBABILITY,
        }
    }

    /// Replace the probability substituted for unseen words. Must lie in
    /// `(0, 1)`.
    pub fn with_floor_probability(mut self, floor: f64) -> Self {
        self.floor = floor;
        self
    }

    pub fn floor_probability(&self) -> f64 {
        self.floor
    }

    pub fn store(&self) -> &Arc<dyn CountStore> {
        &self.store
    }

    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Teach `text` as an example of `class`.
    pub fn learn(&self, class: &str, text: &str) -> Result<(), ClassifierError> {
        check_document(class, text)?;
        self.bulk_learn(&[Document::new(class, text)])
    }

    /// Teach every document in one atomic store update. Documents sharing a
    /// class add up before anything reaches the store.
    pub fn bulk_learn(&self, documents: &[Document]) -> Result<(), ClassifierError> {
        check_batch(documents)?;
        let deltas = self.collect_deltas(documents, 1);

        let mut classes: Vec<&String> = deltas.keys().collect();
        classes.sort_unstable();
        for class in classes {
            self.store.add_class(class)?;
        }
        self.store.increment_class_word_counts(&deltas)?;

        tracing::debug!(
            documents = documents.len(),
            classes = deltas.len(),
            backend = self.store.backend_name(),
            "learned batch"
        );
        Ok(())
    }

    /// Remove `text` from what `class` has learned. Counts stop at zero.
    pub fn forget(&self, class: &str, text: &str) -> Result<(), ClassifierError> {
        check_document(class, text)?;
        self.bulk_forget(&[Document::new(class, text)])
    }

    /// Forget every document in one atomic store update.
    pub fn bulk_forget(&self, documents: &[Document]) -> Result<(), ClassifierError> {
        check_batch(documents)?;
        let deltas = self.collect_deltas(documents, -1);
        self.store.increment_class_word_counts(&deltas)?;

        tracing::debug!(
            documents = documents.len(),
            classes = deltas.len(),
            backend = self.store.backend_name(),
            "forgot batch"
        );
        Ok(())
    }

    /// Normalized likelihood of `text` under every class with learned mass.
    ///
    /// Each store read is its own snapshot; a concurrent learn may land
    /// between the totals read and the per-class count reads.
    pub fn score(&self, text: &str) -> Result<Scores, ClassifierError> {
        let totals = self.store.total_class_word_counts()?;

        let mut words: Vec<String> = self.tokenizer.tokenize(text).into_keys().collect();
        words.sort_unstable();

        let mut raw = BTreeMap::new();
        for (class, total) in totals {
            if total <= 0 {
                continue;
            }
            let counts = self.store.class_word_counts(&class, &words)?;
            raw.insert(class, log_likelihood(&words, &counts, total, self.floor));
        }

        tracing::trace!(words = words.len(), classes = raw.len(), "scored text");
        Ok(normalize(raw))
    }

    /// The class `text` most likely belongs to. Ties go to the smallest
    /// class name.
    pub fn classify(&self, text: &str) -> Result<String, ClassifierError> {
        let scores = self.score(text)?;
        best_class(&scores)
            .map(str::to_string)
            .ok_or(ClassifierError::Untrained)
    }

    /// Drop every class and count from the store.
    pub fn reset(&self) -> Result<(), ClassifierError> {
        self.store.reset()?;
        Ok(())
    }

    /// Tokenize each document and sum per class, scaled by `sign`.
    fn collect_deltas(&self, documents: &[Document], sign: i64) -> ClassDeltas {
        let mut deltas = ClassDeltas::default();
        for doc in documents {
            let class_words = deltas
                .entry(doc.class.clone())
                .or_insert_with(WordCounts::default);
            for (word, count) in self.tokenizer.tokenize(&doc.text) {
                let entry = class_words.entry(word).or_insert(0);
                *entry = entry.saturating_add(count.saturating_mul(sign));
            }
        }
        deltas
    }
}

impl std::fmt::Debug for Classifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Classifier")
            .field("backend", &self.store.backend_name())
            .field("tokenizer", &self.tokenizer.name())
            .field("floor", &self.floor)
            .finish()
    }
}

fn check_document(class: &str, text: &str) -> Result<(), ClassifierError> {
    if class.is_empty() {
        return Err(ClassifierError::InvalidClass);
    }
    if text.is_empty() {
        return Err(ClassifierError::InvalidText);
    }
    Ok(())
}

fn check_batch(documents: &[Document]) -> Result<(), ClassifierError> {
    if documents.is_empty() {
        return Err(ClassifierError::InvalidInput);
    }
    documents
        .iter()
        .try_for_each(|doc| check_document(&doc.class, &doc.text))
}
