//! Router configuration for the gateway.

use axum::{
    routing::{get, post},
    Router,
};

use booking_correlation::CorrelationLayer;
use tower_http::trace::TraceLayer;

use super::health::health_check;
use super::state::AppState;
use crate::api::{accounts, bookings};

/// Build the public gateway router.
///
/// The correlation layer wraps everything: this is the edge where
/// identifiers are minted, so every downstream call made while
/// servicing a request can carry one.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/book/:date", post(bookings::book))
        .route("/check/:date", get(bookings::check))
        .route("/authorize", post(accounts::authorize))
        .route("/validate", post(accounts::validate))
        .route("/create", post(accounts::create))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorrelationLayer::mint())
        .with_state(state)
}
