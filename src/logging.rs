//! TUI-safe tracing setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default so log lines never corrupt the strip.
/// Set the `WEATHERBAR_LOG` env var to a file path to enable logging;
/// the filter comes from `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    let Ok(log_path) = std::env::var("WEATHERBAR_LOG") else {
        // No logging configured - skip initialization entirely
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&log_path) else {
        eprintln!("Warning: Failed to create log file: {log_path}");
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
