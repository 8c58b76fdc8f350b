// main.rs
//
// Serves the fractal mesh endpoint. Configuration comes from `FRACTALMESH_CONFIG` (JSON file),
// `FRACTALMESH_BIND` and `FRACTALMESH_MAX_SAMPLES`; log level from `RUST_LOG`.

use anyhow::Context;
use fractalmesh::config::ServerConfig;
use fractalmesh::server::{GENERATE_ROUTE, app};
use fractalmesh::surface::SurfaceKind;
use log::{info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let config = ServerConfig::load().context("Failed to load configuration")?;
    info!("Configuration: {:?}", config);

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address))?;
    info!(
        "Serving POST {} on {} (kinds: {})",
        GENERATE_ROUTE,
        config.bind_address,
        SurfaceKind::ALL.map(SurfaceKind::name).join(", ")
    );

    axum::serve(listener, app(config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Could not listen for ctrl-c, running until killed: {err}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
