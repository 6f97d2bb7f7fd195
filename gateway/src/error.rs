//! Gateway error type: the bridge between domain errors and HTTP status.
//!
//! Taxonomy mapping:
//!
//! - identity errors (invalid/expired token, bad credentials) → 401
//! - unknown user, no room available → 404 (resource exhaustion is a
//!   normal outcome, not a fault)
//! - duplicate account → 409
//! - structural errors (malformed date, missing bearer) → 400, decided
//!   here before any coordinator call
//! - collaborator unreachable → 502

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use booking_identity::IdentityError;
use booking_inventory::BookingError;

/// Application error type for gateway handlers.
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
    code: String,
}

impl AppError {
    /// Create a new application error.
    #[must_use]
    pub const fn new(status: StatusCode, message: String, code: String) -> Self {
        Self {
            status,
            message,
            code,
        }
    }

    /// Create a 400 Bad Request error (structural problems only).
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            message.into(),
            "BAD_REQUEST".to_string(),
        )
    }

    /// Create a 401 Unauthorized error.
    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            message.into(),
            "UNAUTHORIZED".to_string(),
        )
    }

    /// The HTTP status this error maps to.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<IdentityError> for AppError {
    fn from(err: IdentityError) -> Self {
        let status = match &err {
            IdentityError::InvalidCredentials
            | IdentityError::InvalidToken
            | IdentityError::ExpiredToken => StatusCode::UNAUTHORIZED,
            IdentityError::UserNotFound => StatusCode::NOT_FOUND,
            IdentityError::UserExists => StatusCode::CONFLICT,
            IdentityError::Unavailable(_) => StatusCode::BAD_GATEWAY,
            IdentityError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string(), err.code().to_string())
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::Identity(identity) => identity.into(),
            BookingError::NoRoomAvailable => Self::new(
                StatusCode::NOT_FOUND,
                err.to_string(),
                err.code().to_string(),
            ),
            BookingError::Unavailable(_) => Self::new(
                StatusCode::BAD_GATEWAY,
                err.to_string(),
                err.code().to_string(),
            ),
            BookingError::Internal(_) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                err.to_string(),
                err.code().to_string(),
            ),
        }
    }
}

/// Error response body (JSON).
#[derive(Debug, Serialize)]
struct ErrorResponse {
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(
                status = %self.status,
                code = %self.code,
                message = %self.message,
                "gateway request failed"
            );
        }
        let body = ErrorResponse {
            code: self.code,
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = AppError::bad_request("invalid date");
        assert_eq!(err.to_string(), "[BAD_REQUEST] invalid date");
    }

    #[test]
    fn test_identity_error_statuses() {
        assert_eq!(
            AppError::from(IdentityError::ExpiredToken).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::from(IdentityError::UserNotFound).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(IdentityError::UserExists).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::from(IdentityError::Unavailable("down".into())).status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_no_room_available_is_not_found() {
        assert_eq!(
            AppError::from(BookingError::NoRoomAvailable).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_identity_error_inside_booking_error_keeps_status() {
        let err = BookingError::Identity(IdentityError::InvalidToken);
        assert_eq!(AppError::from(err).status(), StatusCode::UNAUTHORIZED);
    }
}
