//! Error handling for Shield.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod classifier_error;
pub mod config_error;
pub mod error_code;
pub mod shield_error;
pub mod storage_error;

pub use classifier_error::ClassifierError;
pub use config_error::ConfigError;
pub use error_code::ShieldErrorCode;
pub use shield_error::ShieldError;
pub use storage_error::StorageError;
