//! File-based logging module for movies-rs
//!
//! The terminal is owned by the TUI, so tracing output goes to a rolling file
//! instead of stdout.

use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

const LOG_DIR: &str = ".logs";
const LOG_FILE_PREFIX: &str = "movies-rs";

/// Initialize the logging system.
///
/// Logs are written to `.logs/movies-rs.YYYY-MM-DD.log` with daily rotation.
/// The log level can be controlled via the `RUST_LOG` environment variable.
///
/// Default log levels:
/// - `movies_rs` modules: DEBUG
/// - `reqwest` / `hyper`: INFO
/// - Other crates: WARN
pub fn init_logging() -> anyhow::Result<()> {
    let log_dir = Path::new(LOG_DIR);
    if !log_dir.exists() {
        std::fs::create_dir_all(log_dir)?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, LOG_DIR, LOG_FILE_PREFIX);

    // Non-blocking so a slow disk never stalls the render loop
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // The guard flushes on drop; it has to live as long as the process
    Box::leak(Box::new(guard));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("movies_rs=debug,reqwest=info,hyper=info,warn")
    });

    let fmt_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();

    tracing::info!("Logging initialized - logs written to {}/", LOG_DIR);

    Ok(())
}

/// Log the outcome of a catalog API request, with the result count for lists
#[macro_export]
macro_rules! log_api_result {
    ($operation:expr, $path:expr, $result:expr) => {
        match &$result {
            Ok(_) => tracing::debug!(operation = $operation, path = %$path, "TMDb request succeeded"),
            Err(e) => tracing::warn!(operation = $operation, path = %$path, error = %e, "TMDb request failed"),
        }
    };
    ($operation:expr, $path:expr, $result:expr, counted) => {
        match &$result {
            Ok(items) => tracing::debug!(
                operation = $operation,
                path = %$path,
                count = items.len(),
                "TMDb request succeeded"
            ),
            Err(e) => tracing::warn!(operation = $operation, path = %$path, error = %e, "TMDb request failed"),
        }
    };
}

/// Log a catalog API request before it is sent
#[macro_export]
macro_rules! log_api_request {
    ($operation:expr, $path:expr) => {
        tracing::debug!(operation = $operation, path = %$path, "TMDb request started");
    };
    ($operation:expr, $path:expr, $($field:tt)+) => {
        tracing::debug!(operation = $operation, path = %$path, $($field)+, "TMDb request started");
    };
}
