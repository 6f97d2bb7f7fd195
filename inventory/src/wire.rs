//! Request/response bodies for the inventory service's HTTP surface.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// `POST /book` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookRequest {
    /// Opaque identity token; interpreted only by the Authenticator.
    pub token: String,
    /// Calendar date to book, day granularity.
    pub date: NaiveDate,
}

/// `POST /book` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookResponse {
    /// Assigned room, 0-based ledger index.
    pub room_index: usize,
}

/// `GET /check/{date}` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResponse {
    /// Rooms currently free for the date. Advisory under concurrency.
    pub available: usize,
}

/// Error body carried on every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable machine-readable code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}
