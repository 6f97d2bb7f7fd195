//! Configuration for the inventory service binary.

use std::env;

/// Inventory service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
    /// Number of rooms in a fresh ledger (store bookings may imply more).
    pub total_rooms: usize,
    /// Base URL of the identity service.
    pub identity_url: String,
    /// Timeout for remote calls, in seconds.
    pub remote_timeout: u64,
    /// PostgreSQL URL for the durable store; unset means in-memory only.
    pub database_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            host: env::var("INVENTORY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("INVENTORY_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8082),
            total_rooms: env::var("INVENTORY_TOTAL_ROOMS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            identity_url: env::var("IDENTITY_URL")
                .unwrap_or_else(|_| "http://localhost:8081".to_string()),
            remote_timeout: env::var("REMOTE_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
            database_url: env::var("DATABASE_URL").ok(),
        }
    }
}
