//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "SHIELD_LOG";

/// Initialize the Shield logging system.
///
/// Reads `SHIELD_LOG` for per-crate log levels, e.g.
/// `SHIELD_LOG=shield_storage=debug,shield_classifier=info`.
/// Falls back to `shield=info` if unset or invalid.
///
/// Idempotent: only the first call installs a subscriber, and an already
/// installed global subscriber is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("shield=info"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
