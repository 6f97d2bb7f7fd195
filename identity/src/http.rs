//! HTTP surface of the identity service.
//!
//! Three operations behind the correlation-restoring layer. Structural
//! validation (missing bearer token, malformed JSON) happens here;
//! well-formed requests are handed to [`IdentityService`].

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use booking_correlation::CorrelationLayer;
use tower_http::trace::TraceLayer;

use crate::error::IdentityError;
use crate::service::IdentityService;
use crate::wire::{AuthorizeRequest, AuthorizeResponse, CreateRequest, ErrorBody, ValidateResponse};

/// Build the identity service router.
pub fn router(service: Arc<IdentityService>) -> Router {
    Router::new()
        .route("/authorize", post(authorize))
        .route("/validate", post(validate))
        .route("/create", post(create))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorrelationLayer::restore())
        .with_state(service)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn authorize(
    State(service): State<Arc<IdentityService>>,
    Json(req): Json<AuthorizeRequest>,
) -> Result<Json<AuthorizeResponse>, ApiError> {
    let token = service.authorize(&req.user, &req.password).await?;
    Ok(Json(AuthorizeResponse { token }))
}

async fn validate(
    State(service): State<Arc<IdentityService>>,
    headers: HeaderMap,
) -> Result<Json<ValidateResponse>, ApiError> {
    let token = bearer_token(&headers).ok_or(IdentityError::InvalidToken)?;
    let user = service.validate(token).await?;
    Ok(Json(ValidateResponse { user }))
}

async fn create(
    State(service): State<Arc<IdentityService>>,
    Json(req): Json<CreateRequest>,
) -> Result<StatusCode, ApiError> {
    service.create(&req.user, &req.password).await?;
    Ok(StatusCode::CREATED)
}

/// The token from an `Authorization: Bearer <token>` header, if present.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Wire representation of an [`IdentityError`].
struct ApiError(IdentityError);

impl From<IdentityError> for ApiError {
    fn from(err: IdentityError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            IdentityError::InvalidCredentials
            | IdentityError::InvalidToken
            | IdentityError::ExpiredToken => StatusCode::UNAUTHORIZED,
            IdentityError::UserNotFound => StatusCode::NOT_FOUND,
            IdentityError::UserExists => StatusCode::CONFLICT,
            IdentityError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            IdentityError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self.0, "identity operation failed");
        }
        let body = ErrorBody {
            code: self.0.code().to_owned(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
