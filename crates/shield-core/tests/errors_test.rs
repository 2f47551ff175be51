//! Tests for the Shield error handling system.

use std::collections::HashSet;

use shield_core::errors::error_code::ShieldErrorCode;
use shield_core::errors::*;

#[test]
fn test_all_errors_have_error_code() {
    let storage = StorageError::DbBusy;
    assert!(!storage.error_code().is_empty());

    let classifier = ClassifierError::InvalidInput;
    assert!(!classifier.error_code().is_empty());

    let config = ConfigError::FileNotFound {
        path: "/tmp".into(),
    };
    assert!(!config.error_code().is_empty());

    let shield: ShieldError = config.into();
    assert_eq!(shield.error_code(), "CONFIG_ERROR");
}

#[test]
fn test_backend_failures_have_distinct_codes() {
    let codes: HashSet<&str> = [
        StorageError::Unavailable {
            message: "connection refused".into(),
        }
        .error_code(),
        StorageError::TransactionAborted {
            message: "EXECABORT".into(),
        }
        .error_code(),
        StorageError::InvalidClass { class: String::new() }.error_code(),
        StorageError::SqliteError {
            message: "disk I/O".into(),
        }
        .error_code(),
    ]
    .into_iter()
    .collect();
    assert_eq!(codes.len(), 4);
}

#[test]
fn test_storage_error_passes_through_classifier() {
    let err: ClassifierError = StorageError::Unavailable {
        message: "gone".into(),
    }
    .into();
    assert!(matches!(err, ClassifierError::Storage(StorageError::Unavailable { .. })));
    assert_eq!(err.error_code(), "STORE_UNAVAILABLE");

    let top: ShieldError = err.into();
    assert_eq!(top.error_code(), "STORE_UNAVAILABLE");
}

#[test]
fn test_coded_string_format() {
    let err = ClassifierError::InvalidText;
    assert_eq!(
        err.coded_string(),
        "[INVALID_TEXT] Invalid text: text must not be empty"
    );
}

#[test]
fn test_transient_classification() {
    assert!(StorageError::DbBusy.is_transient());
    assert!(StorageError::Unavailable { message: String::new() }.is_transient());
    assert!(StorageError::TransactionAborted { message: String::new() }.is_transient());
    assert!(!StorageError::InvalidClass { class: String::new() }.is_transient());
    assert!(!StorageError::MigrationFailed {
        version: 1,
        message: String::new()
    }
    .is_transient());
}
