//! Gateway handlers, grouped by the downstream service they front.

pub mod accounts;
pub mod bookings;

use axum::http::HeaderMap;
use chrono::NaiveDate;

use crate::error::AppError;

/// Parse a `YYYY-MM-DD` path segment into a day-granular date.
///
/// Structural validation: a malformed date short-circuits with
/// bad-request before any downstream call is made.
pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    raw.parse()
        .map_err(|_| AppError::bad_request(format!("invalid date '{raw}', expected YYYY-MM-DD")))
}

/// The token from an `Authorization: Bearer <token>` header.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::unauthorized("missing bearer token"))
}
