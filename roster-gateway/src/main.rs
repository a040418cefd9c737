//! Entry point for the `roster-gateway` HTTP server.

use std::sync::Arc;

use roster_gateway::{config::GatewayConfig, routes::create_router, state::SharedDirectory};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match GatewayConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let seed = match config.load_seed() {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "failed to load seed");
            std::process::exit(1);
        }
    };

    info!(
        activities = seed.len(),
        policy = %config.capacity_policy,
        seed = ?config.seed_path,
        "directory loaded"
    );

    let directory = Arc::new(SharedDirectory::from_seed(seed, config.capacity_policy));
    let app = create_router(directory, &config.static_dir);

    let listener = match tokio::net::TcpListener::bind(config.listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %config.listen_addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %config.listen_addr, "roster-gateway listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
