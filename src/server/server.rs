use crate::config::Config;
use crate::server::{create_router, ServerError};
use tokio::net::TcpListener;
use tracing::info;

/// Serves the activity routes on the configured address until Ctrl-C.
pub async fn serve(config: &Config) -> Result<(), ServerError> {
    let address = config.socket_addr();
    let listener = TcpListener::bind(address).await?;
    info!("Activity service listening on http://{}", listener.local_addr()?);

    axum::serve(listener, create_router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Activity service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
