use std::fs::File;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

use crate::config::LogConfig;

/// Handle to keep the logging worker thread alive
pub struct LogGuard {
    // Kept alive until dropped
    _guard: WorkerGuard,
}

/// Initialize the logging system
pub fn init(config: &LogConfig) -> Result<Option<LogGuard>> {
    // RUST_LOG env var takes precedence over the configured level
    let filter = || {
        EnvFilter::builder()
            .with_default_directive(config.level.parse().unwrap_or_else(|_| {
                eprintln!("Invalid log level {:?}, falling back to info", config.level);
                tracing::level_filters::LevelFilter::INFO.into()
            }))
            .from_env_lossy()
    };

    // Console on stderr; stdout stays clean
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .with_filter(filter());

    let (file_layer, guard) = if let Some(path) = &config.file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        let (non_blocking, worker_guard) = tracing_appender::non_blocking(file);

        let layer = fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_filter(filter());

        (
            Some(layer),
            Some(LogGuard {
                _guard: worker_guard,
            }),
        )
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    tracing::debug!(level = %config.level, "logging initialized");

    Ok(guard)
}
