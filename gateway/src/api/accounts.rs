//! Account endpoints: authorize, validate, create.

use axum::{extract::State, http::HeaderMap, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use booking_correlation::Correlation;

use super::bearer_token;
use crate::error::AppError;
use crate::server::state::AppState;

/// `POST /authorize` and `POST /create` body.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    /// Account name.
    pub user: String,
    /// Account password.
    pub password: String,
}

/// `POST /authorize` response.
#[derive(Debug, Serialize)]
pub struct AuthorizeResponse {
    /// The issued identity token.
    pub token: String,
}

/// `POST /validate` response.
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    /// The user the token is bound to.
    pub user: String,
}

/// Exchange credentials for an identity token.
pub async fn authorize(
    State(state): State<AppState>,
    Correlation(correlation): Correlation,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<AuthorizeResponse>, AppError> {
    let token = state
        .identity
        .authorize(correlation, &req.user, &req.password)
        .await?;
    Ok(Json(AuthorizeResponse { token }))
}

/// Verify the bearer token.
pub async fn validate(
    State(state): State<AppState>,
    Correlation(correlation): Correlation,
    headers: HeaderMap,
) -> Result<Json<ValidateResponse>, AppError> {
    let token = bearer_token(&headers)?;
    let user = state.identity.validate(correlation, token).await?;
    Ok(Json(ValidateResponse { user }))
}

/// Create a new account.
pub async fn create(
    State(state): State<AppState>,
    Correlation(correlation): Correlation,
    Json(req): Json<CredentialsRequest>,
) -> Result<StatusCode, AppError> {
    state
        .identity
        .create(correlation, &req.user, &req.password)
        .await?;
    Ok(StatusCode::CREATED)
}
