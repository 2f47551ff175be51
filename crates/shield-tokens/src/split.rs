//! Word splitting shared by the tokenizers.

use std::sync::LazyLock;

use regex::Regex;

/// Runs of non-word characters, plus `_` (reserved as the bigram joiner).
static SPLIT_RX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[^\w]+|_").ok());

/// Split `text` into lowercase words. Empty pieces are skipped.
pub fn lowercase_words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    match SPLIT_RX.as_ref() {
        Some(rx) => rx
            .split(&lowered)
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect(),
        None => lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect(),
    }
}
