//! Configuration for the gateway binary.

use std::env;

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
    /// Base URL of the identity service.
    pub identity_url: String,
    /// Base URL of the inventory service.
    pub inventory_url: String,
    /// Timeout for remote calls, in seconds.
    pub remote_timeout: u64,
}

impl Config {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            host: env::var("GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("GATEWAY_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
            identity_url: env::var("IDENTITY_URL")
                .unwrap_or_else(|_| "http://localhost:8081".to_string()),
            inventory_url: env::var("INVENTORY_URL")
                .unwrap_or_else(|_| "http://localhost:8082".to_string()),
            remote_timeout: env::var("REMOTE_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
        }
    }
}
