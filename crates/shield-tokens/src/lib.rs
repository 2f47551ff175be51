//! # shield-tokens
//!
//! `Tokenizer` implementations. Both are pure functions of their input and
//! safe to share across threads.

pub mod english;
pub mod split;
pub mod stopwords;
pub mod word;

pub use english::EnglishTokenizer;
pub use word::WordTokenizer;
