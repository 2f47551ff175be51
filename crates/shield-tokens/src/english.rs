//! English tokenizer: stopword filtering, Snowball stemming, stem bigrams.

use rust_stemmers::{Algorithm, Stemmer};
use shield_core::traits::Tokenizer;
use shield_core::types::WordCounts;

use crate::split::lowercase_words;
use crate::stopwords::is_stopword;

/// Tokens (and stems) of this many characters or fewer are dropped.
const MIN_TOKEN_CHARS: usize = 3;

/// Joins two adjacent stems into a bigram token.
pub const BIGRAM_JOINER: char = '_';

/// Tokenizer for English prose.
///
/// Per word: lowercase, drop short tokens, purely numeric tokens and
/// stopwords, then stem. Each kept stem is counted, and so is the bigram it
/// forms with the previous kept stem (`prev_stem`). Since `_` is a split
/// character, a bigram can never collide with a unigram.
pub struct EnglishTokenizer {
    stemmer: Stemmer,
    bigrams: bool,
}

impl EnglishTokenizer {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
            bigrams: true,
        }
    }

    /// Stems only, no bigrams.
    pub fn unigrams() -> Self {
        Self {
            bigrams: false,
            ..Self::new()
        }
    }

    fn keep(word: &str) -> bool {
        word.chars().count() >= MIN_TOKEN_CHARS
            && word.parse::<i64>().is_err()
            && !is_stopword(word)
    }
}

impl Default for EnglishTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EnglishTokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnglishTokenizer")
            .field("bigrams", &self.bigrams)
            .finish()
    }
}

impl Tokenizer for EnglishTokenizer {
    fn tokenize(&self, text: &str) -> WordCounts {
        let mut words = WordCounts::default();
        let mut prev: Option<String> = None;

        for word in lowercase_words(text) {
            if !Self::keep(&word) {
                continue;
            }
            let stem = self.stemmer.stem(&word).into_owned();
            if stem.chars().count() < MIN_TOKEN_CHARS {
                continue;
            }
            if self.bigrams {
                if let Some(p) = &prev {
                    let bigram = format!("{p}{BIGRAM_JOINER}{stem}");
                    *words.entry(bigram).or_insert(0) += 1;
                }
            }
            *words.entry(stem.clone()).or_insert(0) += 1;
            prev = Some(stem);
        }
        words
    }

    fn name(&self) -> &str {
        "english"
    }
}
