//! Plain word tokenizer: lowercase words, no filtering.

use shield_core::traits::Tokenizer;
use shield_core::types::WordCounts;

use crate::split::lowercase_words;

/// Counts every lowercase word in the text. No stemming, stopwords or
/// n-grams, so learned words can be looked up in a store verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> WordCounts {
        let mut words = WordCounts::default();
        for w in lowercase_words(text) {
            *words.entry(w).or_insert(0) += 1;
        }
        words
    }

    fn name(&self) -> &str {
        "word"
    }
}
