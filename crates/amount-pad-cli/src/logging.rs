//! Log subscriber setup
//!
//! Logs go to stderr so they never mix with replay output on stdout.

use std::io;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::CliConfig;

/// Builds the filter: `RUST_LOG` when set, otherwise the verbosity default
#[must_use]
pub fn make_filter(config: &CliConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.verbosity.log_directive()))
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init_logging(config: &CliConfig) {
    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(config.color.should_color());

    let _ = tracing_subscriber::registry()
        .with(make_filter(config))
        .with(stderr_layer)
        .try_init();
}
