use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 4567;
pub const DEFAULT_JAEGER_ENDPOINT: &str = "http://jaeger:14268/api/traces";
pub const DEFAULT_SERVICE_NAME: &str = "activity-feed";
pub const DEFAULT_TRACE_SAMPLE_RATIO: f64 = 1.0;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid bind address: {0}")]
    InvalidBindAddr(String),

    #[error("Invalid port: {0}")]
    InvalidPort(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidFlag { name: &'static str, value: String },

    #[error("Invalid log format: {0}")]
    InvalidLogFormat(String),

    #[error("Invalid trace sample ratio: {0}")]
    InvalidSampleRatio(String),
}

/// Output shape of the fmt log layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(ConfigError::InvalidLogFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub log_format: LogFormat,
    pub enable_telemetry: bool,
    pub jaeger_endpoint: String,
    pub service_name: String,
    /// Fraction of root traces exported, in `0.0..=1.0`
    pub trace_sample_ratio: f64,
}

impl Config {
    pub fn new() -> Self {
        Self {
            bind_addr: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            log_format: LogFormat::Json,
            enable_telemetry: false,
            jaeger_endpoint: DEFAULT_JAEGER_ENDPOINT.to_string(),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            trace_sample_ratio: DEFAULT_TRACE_SAMPLE_RATIO,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::new();

        let bind_addr = match lookup("BIND_ADDR") {
            Some(value) => value
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidBindAddr(value))?,
            None => defaults.bind_addr,
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => defaults.port,
        };

        let enable_telemetry = match lookup("ENABLE_TELEMETRY") {
            Some(value) => value
                .parse::<bool>()
                .map_err(|_| ConfigError::InvalidFlag {
                    name: "ENABLE_TELEMETRY",
                    value,
                })?,
            None => defaults.enable_telemetry,
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(value) => value.parse::<LogFormat>()?,
            None => defaults.log_format,
        };

        let trace_sample_ratio = match lookup("TRACE_SAMPLE_RATIO") {
            Some(value) => match value.parse::<f64>() {
                Ok(ratio) if (0.0..=1.0).contains(&ratio) => ratio,
                _ => return Err(ConfigError::InvalidSampleRatio(value)),
            },
            None => defaults.trace_sample_ratio,
        };

        Ok(Self {
            bind_addr,
            port,
            log_format,
            enable_telemetry,
            jaeger_endpoint: lookup("JAEGER_ENDPOINT").unwrap_or(defaults.jaeger_endpoint),
            service_name: lookup("SERVICE_NAME").unwrap_or(defaults.service_name),
            trace_sample_ratio,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
