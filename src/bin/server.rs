//! Runs the release tag endpoint as a plain HTTP server (default `0.0.0.0:8080`).

use release_tag_api::config::ServiceConfig;
use release_tag_api::{server, telemetry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    telemetry::init();

    let config = ServiceConfig::from_env()?;
    let handle = server::start(config).await?;

    tokio::signal::ctrl_c().await?;
    tracing::info!(url = %handle.url, "shutting down");
    handle.shutdown();

    Ok(())
}
