use crate::config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tracer installation failed: {0}")]
    Trace(#[from] opentelemetry::trace::TraceError),

    #[error("Tracing subscriber initialization failed: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}
