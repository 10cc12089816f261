use crate::config::{Config, LogFormat};
use crate::server::ServerError;
use opentelemetry::sdk::propagation::TraceContextPropagator;
use opentelemetry::sdk::{
    trace::{self, RandomIdGenerator, Sampler},
    Resource,
};
use opentelemetry::{global, KeyValue};
use std::time::Duration;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

pub const DEFAULT_DIRECTIVES: &str = "activity_feed=debug,tower_http=debug,axum=trace,warn";

const EXPORT_TIMEOUT: Duration = Duration::from_secs(2);
const MAX_EVENTS_PER_SPAN: u32 = 64;
const MAX_ATTRIBUTES_PER_SPAN: u32 = 16;

/// Installs the global subscriber: env filter, fmt output in the configured
/// format, and the Jaeger exporter when telemetry is enabled.
pub fn init_telemetry(config: &Config) -> Result<(), ServerError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    let jaeger = if config.enable_telemetry {
        global::set_text_map_propagator(TraceContextPropagator::new());

        let tracer = opentelemetry_jaeger::new_collector_pipeline()
            .with_service_name(config.service_name.clone())
            .with_endpoint(&config.jaeger_endpoint)
            .with_isahc()
            .with_trace_config(trace_config(config))
            .with_timeout(EXPORT_TIMEOUT)
            .install_batch(opentelemetry::runtime::Tokio)?;

        Some(tracing_opentelemetry::layer().with_tracer(tracer))
    } else {
        None
    };

    Registry::default()
        .with(env_filter)
        .with(fmt_layer(config.log_format))
        .with(jaeger)
        .try_init()?;

    if config.enable_telemetry {
        tracing::info!(
            endpoint = %config.jaeger_endpoint,
            ratio = config.trace_sample_ratio,
            "Telemetry initialized"
        );
    } else {
        tracing::info!("Telemetry disabled");
    }

    Ok(())
}

pub fn shutdown_telemetry(config: &Config) {
    if config.enable_telemetry {
        // flush pending spans
        global::shutdown_tracer_provider();
    }
}

fn fmt_layer<S>(format: LogFormat) -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a> + 'static,
{
    let layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_file(true);

    match format {
        LogFormat::Json => layer.json().boxed(),
        LogFormat::Pretty => layer.with_ansi(true).pretty().boxed(),
    }
}

fn sampler(ratio: f64) -> Sampler {
    if ratio >= 1.0 {
        Sampler::AlwaysOn
    } else if ratio <= 0.0 {
        Sampler::AlwaysOff
    } else {
        Sampler::ParentBased(Box::new(Sampler::TraceIdRatioBased(ratio)))
    }
}

fn trace_config(config: &Config) -> trace::Config {
    trace::config()
        .with_sampler(sampler(config.trace_sample_ratio))
        .with_id_generator(RandomIdGenerator::default())
        .with_max_events_per_span(MAX_EVENTS_PER_SPAN)
        .with_max_attributes_per_span(MAX_ATTRIBUTES_PER_SPAN)
        .with_resource(Resource::new(vec![
            KeyValue::new("service.name", config.service_name.clone()),
            KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
        ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_parse() {
        let filter = EnvFilter::try_new(DEFAULT_DIRECTIVES);
        assert!(filter.is_ok());
        assert!(!DEFAULT_DIRECTIVES.contains("rejection"));
    }

    #[test]
    fn test_sampler_follows_ratio() {
        assert!(matches!(sampler(1.0), Sampler::AlwaysOn));
        assert!(matches!(sampler(0.0), Sampler::AlwaysOff));
        match sampler(0.25) {
            Sampler::ParentBased(root) => {
                assert!(matches!(*root, Sampler::TraceIdRatioBased(r) if r == 0.25))
            }
            other => panic!("Expected parent-based sampler, got {:?}", other),
        }
    }
}
