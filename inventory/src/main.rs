//! Inventory service binary.

use std::sync::Arc;
use std::time::Duration;

use booking_identity::IdentityClient;
use booking_inventory::config::Config;
use booking_inventory::{http, BookingCoordinator, InventoryStore, MemoryStore};
use booking_ledger::RoomLedger;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "booking_inventory=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        host = %config.host,
        port = config.port,
        total_rooms = config.total_rooms,
        identity_url = %config.identity_url,
        "starting inventory service"
    );

    let store = build_store(&config).await;

    // Seeding tolerates a missing or empty store: a fresh inventory
    // simply starts with no bookings.
    let snapshots = match &store {
        Some(store) => match store.load_rooms().await {
            Ok(snapshots) => snapshots,
            Err(err) => {
                warn!(error = %err, "could not load rooms from store, starting fresh");
                Vec::new()
            }
        },
        None => Vec::new(),
    };
    let ledger = RoomLedger::seeded(config.total_rooms, snapshots);
    info!(total = ledger.total(), "room ledger ready");

    let validator = Arc::new(IdentityClient::new(
        config.identity_url.clone(),
        Duration::from_secs(config.remote_timeout),
    )?);
    let coordinator = BookingCoordinator::new(ledger, validator, store);

    let app = http::router(Arc::new(coordinator));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, "inventory service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("inventory service stopped");
    Ok(())
}

#[cfg(feature = "postgres")]
async fn build_store(config: &Config) -> Option<Arc<dyn InventoryStore>> {
    match &config.database_url {
        Some(url) => match booking_inventory::stores::PostgresStore::connect(url).await {
            Ok(store) => {
                info!("connected to postgres inventory store");
                Some(Arc::new(store) as Arc<dyn InventoryStore>)
            }
            Err(err) => {
                warn!(error = %err, "could not connect to store, bookings will not be persisted");
                None
            }
        },
        None => Some(Arc::new(MemoryStore::new()) as Arc<dyn InventoryStore>),
    }
}

#[cfg(not(feature = "postgres"))]
async fn build_store(config: &Config) -> Option<Arc<dyn InventoryStore>> {
    if config.database_url.is_some() {
        warn!("DATABASE_URL set but the postgres feature is not enabled, using in-memory store");
    }
    Some(Arc::new(MemoryStore::new()) as Arc<dyn InventoryStore>)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install Ctrl+C handler");
        return;
    }
    info!("received shutdown signal");
}
