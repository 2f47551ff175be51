//! Trait seams between the engine and its collaborators.

pub mod count_store;
pub mod tokenizer;

pub use count_store::CountStore;
pub use tokenizer::Tokenizer;
