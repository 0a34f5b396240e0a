//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber with a plain-text file
//! writer, setting up the complete pipeline from `tracing` macros to the
//! session log.

use crate::infrastructure::paths::LOG_FILE_NAME;
use crate::Config;
use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with file-based log output.
///
/// Sets up a tracing subscriber pipeline that:
/// 1. Filters events based on the configured trace level
/// 2. Formats them as plain text without ANSI colors
/// 3. Appends them to the session log in the data directory
///
/// # Trace Level Resolution
///
/// Level is determined by:
/// 1. `RUST_LOG` environment variable (full filter syntax) if set
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// # File Location
///
/// Logs are appended to `fluxline.log` inside the resolved data directory,
/// next to the item and theme files. When the directory cannot be created
/// or the file cannot be opened, output falls back to stderr so a broken
/// disk never silences diagnostics entirely.
///
/// # Initialization Behavior
///
/// Idempotent: safe to call multiple times, only the first call takes
/// effect.
///
/// # Example
///
/// ```no_run
/// use fluxline::observability::init_tracing;
/// use fluxline::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(log_writer(config)),
    );

    let _ = subscriber.try_init();
}

/// Opens the session log for appending, falling back to stderr.
fn log_writer(config: &Config) -> BoxMakeWriter {
    let data_dir = config.resolved_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return BoxMakeWriter::new(std::io::stderr);
    }

    match File::options()
        .create(true)
        .append(true)
        .open(data_dir.join(LOG_FILE_NAME))
    {
        Ok(file) => BoxMakeWriter::new(Mutex::new(file)),
        Err(_) => BoxMakeWriter::new(std::io::stderr),
    }
}
