//! Classification engine errors.

use super::error_code::{self, ShieldErrorCode};
use super::StorageError;

/// Errors returned by the `Classifier`.
///
/// Precondition violations are detected before any store call, so they
/// never leave a partial mutation behind.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("Invalid class: class must not be empty")]
    InvalidClass,

    #[error("Invalid text: text must not be empty")]
    InvalidText,

    #[error("Invalid input: batch must not be empty")]
    InvalidInput,

    #[error("No class has learned any words yet")]
    Untrained,

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ShieldErrorCode for ClassifierError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidClass => error_code::INVALID_CLASS,
            Self::InvalidText => error_code::INVALID_TEXT,
            Self::InvalidInput => error_code::INVALID_INPUT,
            Self::Untrained => error_code::UNTRAINED,
            Self::Storage(e) => e.error_code(),
        }
    }
}
