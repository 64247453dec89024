use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Sets up `tracing` to write to stderr, leaving stdout to the worker summaries.
///
/// The returned guard flushes buffered log lines when dropped, so it has to
/// be kept alive until the end of `main`.
pub fn init_logging() -> WorkerGuard {
    let (non_blocking_stderr, guard) = tracing_appender::non_blocking(std::io::stderr());
    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(non_blocking_stderr);

    Registry::default()
        .with(stderr_layer)
        .with(EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("INFO")))
        .init();

    guard
}
