//! Tests for the Shield tracing setup.

use std::sync::Mutex;

use shield_core::tracing::init_tracing;

static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_shield_log_filter_accepted() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("SHIELD_LOG", "shield_storage=debug,shield_classifier=warn");
    init_tracing();
    std::env::remove_var("SHIELD_LOG");
    tracing::info!("tracing initialized");
}

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    init_tracing();
}
