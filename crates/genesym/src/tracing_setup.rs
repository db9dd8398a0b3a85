//! Tracing initialization.

use std::sync::Once;

use genesym_core::constants::LOG_ENV_VAR;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Default filter when `GENESYM_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "genesym=info";

/// Initialize structured logging.
///
/// Reads `GENESYM_LOG` for per-crate levels, e.g.
/// `GENESYM_LOG=genesym=info,genesym_graph=debug`.
/// Idempotent; a subscriber installed elsewhere is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        install(filter);
    });
}

/// Initialize with an explicit filter string (for tests or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::new(filter);
    INIT.call_once(|| install(filter));
}

fn install(filter: EnvFilter) {
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
}
