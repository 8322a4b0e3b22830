//! Tracing initialization for the chat binary.
//!
//! Logging starts before configuration is resolved so that config-time
//! warnings reach stderr. The configured level is applied afterwards by
//! reloading the filter.

use std::sync::OnceLock;

use concierge_core::config::defaults::DEFAULT_LOG_LEVEL;
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

/// Per-target directives, e.g. `CONCIERGE_LOG=concierge_matcher=debug`.
pub const LOG_ENV: &str = "CONCIERGE_LOG";

static FILTER: OnceLock<reload::Handle<EnvFilter, Registry>> = OnceLock::new();

/// Initialize logging to stderr from `CONCIERGE_LOG`, or the default level.
///
/// Idempotent.
pub fn init_tracing() {
    FILTER.get_or_init(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
        let (filter, handle) = reload::Layer::new(filter);

        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .init();
        handle
    });
}

/// Switch to the configured level. `CONCIERGE_LOG`, when set, wins.
pub fn apply_log_level(level: &str) {
    if std::env::var_os(LOG_ENV).is_some() {
        return;
    }
    let Some(handle) = FILTER.get() else {
        return;
    };
    match EnvFilter::try_new(level) {
        Ok(filter) => {
            if let Err(e) = handle.reload(filter) {
                warn!("could not apply log level {level:?}: {e}");
            }
        }
        Err(e) => warn!("ignoring invalid log level {level:?}: {e}"),
    }
}
