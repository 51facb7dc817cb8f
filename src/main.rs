//! Hyakumi
//!
//! Read-only HTTP API over the food composition table.

use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hyakumi::build_info;
use hyakumi::config::ServerConfig;
use hyakumi::data::Dataset;
use hyakumi::http;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("hyakumi=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = ServerConfig::parse();
    let foods_path = config.dataset.foods_path();
    let metadata_path = config.dataset.metadata_path();
    info!(
        foods = %foods_path.display(),
        metadata = %metadata_path.display(),
        "Loading dataset"
    );

    // A malformed dataset stops the process before it binds
    let dataset = Arc::new(Dataset::load(&foods_path, &metadata_path)?);

    let app = http::router(dataset);
    let listener = tokio::net::TcpListener::bind(config.listen).await?;
    info!(address = %config.listen, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available: run until killed
        std::future::pending::<()>().await;
    }
}
