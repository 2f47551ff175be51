//! # shield-classifier
//!
//! The classification engine. A `Classifier` holds no mutable state of its
//! own: every learned count lives in the injected `CountStore`, so one
//! instance can be shared by any number of threads.

pub mod engine;
pub mod scoring;

pub use engine::Classifier;
