//! Tokenizer trait: text in, word multiset out.

use crate::types::WordCounts;

/// Turns arbitrary UTF-8 text into a multiset of learnable units.
///
/// Implementations may case-fold, stem, drop stopwords or emit n-grams; the
/// engine treats the output opaquely. Tokenizing never fails, and every
/// count in the result is `>= 1`.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> WordCounts;

    fn name(&self) -> &str;
}
