//! Request/response bodies for the identity service's HTTP surface.
//!
//! Shared by the server ([`crate::http`]) and the client
//! ([`crate::client`]) so the two sides cannot drift.

use serde::{Deserialize, Serialize};

/// `POST /authorize` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizeRequest {
    /// Account name.
    pub user: String,
    /// Account password.
    pub password: String,
}

/// `POST /authorize` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizeResponse {
    /// The issued identity token.
    pub token: String,
}

/// `POST /validate` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResponse {
    /// The user the token is bound to.
    pub user: String,
}

/// `POST /create` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRequest {
    /// Account name.
    pub user: String,
    /// Account password.
    pub password: String,
}

/// Error body carried on every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable machine-readable code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}
