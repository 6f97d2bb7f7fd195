//! Booking endpoints: book a room, check availability.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use serde::Serialize;

use booking_correlation::Correlation;

use super::{bearer_token, parse_date};
use crate::error::AppError;
use crate::server::state::AppState;

/// `POST /book/{date}` response.
#[derive(Debug, Serialize)]
pub struct BookResponse {
    /// Assigned room, 0-based ledger index.
    pub room_index: usize,
}

/// `GET /check/{date}` response.
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    /// Rooms currently free for the date. Advisory under concurrency.
    pub available: usize,
}

/// Book a room for the date in the path, on behalf of the bearer token.
pub async fn book(
    State(state): State<AppState>,
    Correlation(correlation): Correlation,
    Path(date): Path<String>,
    headers: HeaderMap,
) -> Result<Json<BookResponse>, AppError> {
    let date = parse_date(&date)?;
    let token = bearer_token(&headers)?;
    let room_index = state.inventory.book(correlation, token, date).await?;
    Ok(Json(BookResponse { room_index }))
}

/// Count rooms available for the date in the path. No authentication.
pub async fn check(
    State(state): State<AppState>,
    Correlation(correlation): Correlation,
    Path(date): Path<String>,
) -> Result<Json<CheckResponse>, AppError> {
    let date = parse_date(&date)?;
    let available = state.inventory.check(correlation, date).await?;
    Ok(Json(CheckResponse { available }))
}
