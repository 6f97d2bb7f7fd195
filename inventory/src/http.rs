//! HTTP surface of the inventory service.
//!
//! The correlation-restoring layer runs before business logic so the
//! identifier minted at the gateway reaches the coordinator and, from
//! there, the identity service.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use std::sync::Arc;

use booking_correlation::{Correlation, CorrelationLayer};
use tower_http::trace::TraceLayer;
use booking_identity::IdentityError;

use crate::coordinator::BookingCoordinator;
use crate::error::BookingError;
use crate::wire::{BookRequest, BookResponse, CheckResponse, ErrorBody};

/// Build the inventory service router.
pub fn router(coordinator: Arc<BookingCoordinator>) -> Router {
    Router::new()
        .route("/book", post(book))
        .route("/check/:date", get(check))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorrelationLayer::restore())
        .with_state(coordinator)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn book(
    State(coordinator): State<Arc<BookingCoordinator>>,
    Correlation(correlation): Correlation,
    Json(req): Json<BookRequest>,
) -> Result<Json<BookResponse>, ApiError> {
    let room_index = coordinator.book(correlation, &req.token, req.date).await?;
    Ok(Json(BookResponse { room_index }))
}

async fn check(
    State(coordinator): State<Arc<BookingCoordinator>>,
    Path(date): Path<NaiveDate>,
) -> Json<CheckResponse> {
    Json(CheckResponse {
        available: coordinator.check(date),
    })
}

/// Wire representation of a [`BookingError`].
struct ApiError(BookingError);

impl From<BookingError> for ApiError {
    fn from(err: BookingError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            BookingError::NoRoomAvailable => StatusCode::NOT_FOUND,
            BookingError::Identity(identity) => match identity {
                IdentityError::InvalidCredentials
                | IdentityError::InvalidToken
                | IdentityError::ExpiredToken => StatusCode::UNAUTHORIZED,
                IdentityError::UserNotFound => StatusCode::NOT_FOUND,
                IdentityError::UserExists => StatusCode::CONFLICT,
                IdentityError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
                IdentityError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            BookingError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            BookingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self.0, "booking operation failed");
        }
        let body = ErrorBody {
            code: self.0.code().to_owned(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;
    use crate::mocks::StaticValidator;
    use axum::body::Body;
    use axum::http::Request;
    use booking_ledger::RoomLedger;
    use tower::ServiceExt;

    fn app(rooms: usize) -> Router {
        let coordinator = BookingCoordinator::new(
            RoomLedger::new(rooms),
            Arc::new(StaticValidator::new([("token-a", "alice")])),
            None,
        );
        router(Arc::new(coordinator))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn book_request(token: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/book")
            .header("content-type", "application/json")
            .body(Body::from(format!(
                r#"{{"token":"{token}","date":"2020-06-13"}}"#
            )))
            .unwrap()
    }

    #[tokio::test]
    async fn test_book_returns_room_index() {
        let response = app(3).oneshot(book_request("token-a")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["room_index"], 0);
    }

    #[tokio::test]
    async fn test_book_with_bad_token_is_401() {
        let response = app(3).oneshot(book_request("nope")).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["code"], "INVALID_TOKEN");
    }

    #[tokio::test]
    async fn test_book_full_ledger_is_404() {
        let app = app(1);
        let response = app.clone().oneshot(book_request("token-a")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(book_request("token-a")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["code"], "NO_ROOM_AVAILABLE");
    }

    #[tokio::test]
    async fn test_check_reports_availability() {
        let response = app(3)
            .oneshot(
                Request::builder()
                    .uri("/check/2020-06-13")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["available"], 3);
    }

    #[tokio::test]
    async fn test_check_malformed_date_is_400() {
        let response = app(3)
            .oneshot(
                Request::builder()
                    .uri("/check/june-13th")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
