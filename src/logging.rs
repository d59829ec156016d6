use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default so the TUI output is not corrupted.
/// Set the `LAYAR_LOG` env var to a file path to enable logging; the
/// verbosity is controlled through `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let Ok(log_path) = std::env::var("LAYAR_LOG") else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&log_path) else {
        eprintln!("Warning: failed to create log file: {}", log_path);
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .init();
}
