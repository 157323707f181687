use std::sync::Mutex;

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming a log file path. Unset means log to stderr.
pub const LOG_PATH_ENV: &str = "FEATUREVOTE_LOG";

/// Initialize tracing.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
/// If `FEATUREVOTE_LOG` is set, events go to `{path}.{timestamp}.{pid}`
/// so concurrent instances never share a file; otherwise to stderr.
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing() -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(file) = std::env::var(LOG_PATH_ENV).ok().and_then(open_log_file) {
        let file_layer = fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(true)
            .with_level(true)
            .with_timer(UtcTime::rfc_3339());

        return tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .try_init();
    }

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
}

fn open_log_file(log_path: String) -> Option<std::fs::File> {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    match std::fs::File::create(&unique_path) {
        Ok(file) => Some(file),
        Err(err) => {
            eprintln!("Warning: Failed to create log file {}: {}", unique_path, err);
            None
        }
    }
}
