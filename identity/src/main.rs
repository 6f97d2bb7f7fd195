//! Identity service binary.

use std::sync::Arc;

use booking_identity::config::Config;
use booking_identity::{http, IdentityService, JwtCodec, MemoryUserStore};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "booking_identity=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(host = %config.host, port = config.port, "starting identity service");

    let ttl = i64::try_from(config.token_ttl)?;
    let service = IdentityService::new(
        Arc::new(JwtCodec::new(&config.jwt_secret)),
        Arc::new(MemoryUserStore::new()),
        chrono::Duration::seconds(ttl),
    );

    let app = http::router(Arc::new(service));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, "identity service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("identity service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install Ctrl+C handler");
        return;
    }
    info!("received shutdown signal");
}
