//! Configuration for the identity service binary.
//!
//! Loads from environment variables with sensible defaults.

use std::env;

/// Identity service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
    /// Shared secret for token signing.
    pub jwt_secret: String,
    /// Token lifetime in seconds.
    pub token_ttl: u64,
}

impl Config {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            host: env::var("IDENTITY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("IDENTITY_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8081),
            jwt_secret: env::var("IDENTITY_JWT_SECRET")
                .unwrap_or_else(|_| "dev-secret-change-in-production".to_string()),
            token_ttl: env::var("IDENTITY_TOKEN_TTL")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(86_400), // 1 day
        }
    }
}
