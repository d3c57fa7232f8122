use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter,
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
// exporing the info! warn! etc tracing macro through this Library
pub use tracing;
pub use tracing::*;

pub fn init_logger(service_name: &str, level: &str, log_base: &str) -> WorkerGuard {
    let file_appender = RollingFileAppender::new(
        Rotation::NEVER,
        log_base,
        format!("{}.log", service_name),
    );
    let (non_blocking, _gaurd) = tracing_appender::non_blocking(file_appender);
    let json_layer = fmt::layer()
        .json()
        .with_writer(non_blocking)
        .with_line_number(true)
        .with_file(true)
        .with_target(true)
        .flatten_event(true);
    // stdout carries the resolved rack paths, diagnostics must stay on stderr
    let stderr_layer = fmt::layer().with_writer(std::io::stderr);
    let filter = EnvFilter::builder()
        .with_default_directive(level.parse::<Level>().unwrap_or(Level::WARN).into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(json_layer)
        .with(stderr_layer)
        .with(filter)
        .init();
    debug!(service = %service_name,"Logging initialized");
    _gaurd
}
