use tracing_appender::non_blocking::WorkerGuard;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{filter::LevelFilter, prelude::*};

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Unable to forward log records to tracing: {0}")]
    LogTracer(#[from] tracing_log::log::SetLoggerError),
    #[error("Unable to install the tracing subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}

/// Installs the bunyan JSON subscriber writing to stdout.
///
/// The returned guard flushes the non blocking writer when dropped, so it has
/// to be kept alive for as long as the process logs.
pub fn init_tracing(app_name: &str, level: LevelFilter) -> Result<WorkerGuard, LoggingError> {
    LogTracer::init()?;

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    let bunyan_formatting_layer =
        BunyanFormattingLayer::new(app_name.to_string(), non_blocking_writer);

    tracing_subscriber::registry()
        .with(level)
        .with(JsonStorageLayer)
        .with(bunyan_formatting_layer)
        .try_init()?;

    Ok(guard)
}
