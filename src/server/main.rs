#![cfg(feature = "server")]

use activity_feed::config::Config;
use activity_feed::server::telemetry::{init_telemetry, shutdown_telemetry};
use activity_feed::server::{serve, ServerError};
use std::process::ExitCode;

#[tokio::main]
pub async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Server failed: {}", e);
            eprintln!("Server failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = Config::from_env()?;
    init_telemetry(&config)?;

    let result = serve(&config).await;
    shutdown_telemetry(&config);
    result
}
