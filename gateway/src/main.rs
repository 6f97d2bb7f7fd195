//! Gateway binary.

use std::time::Duration;

use booking_gateway::config::Config;
use booking_gateway::{build_router, AppState};
use booking_identity::IdentityClient;
use booking_inventory::InventoryClient;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "booking_gateway=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        host = %config.host,
        port = config.port,
        identity_url = %config.identity_url,
        inventory_url = %config.inventory_url,
        "starting gateway"
    );

    let timeout = Duration::from_secs(config.remote_timeout);
    let state = AppState::new(
        IdentityClient::new(config.identity_url.clone(), timeout)?,
        InventoryClient::new(config.inventory_url.clone(), timeout)?,
    );

    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, "gateway listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install Ctrl+C handler");
        return;
    }
    info!("received shutdown signal");
}
