//! Remote-call client for the identity service.

use reqwest::StatusCode;
use std::time::Duration;

use booking_correlation::{propagate, CorrelationId};

use crate::error::IdentityError;
use crate::wire::{AuthorizeRequest, AuthorizeResponse, CreateRequest, ErrorBody, ValidateResponse};

/// HTTP client for the identity service.
///
/// Every call serializes the correlation identifier (when one is in
/// context) onto the outbound request, and every error response is
/// decoded back into the exact [`IdentityError`] the service raised.
#[derive(Debug, Clone)]
pub struct IdentityClient {
    client: reqwest::Client,
    base_url: String,
}

impl IdentityClient {
    /// Build a client for the service at `base_url`.
    ///
    /// The timeout bounds every remote call; a call cut short by it
    /// surfaces as [`IdentityError::Unavailable`], which aborts any
    /// booking attempt waiting on validation.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Internal`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, IdentityError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| IdentityError::Internal(err.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Check credentials and obtain a token.
    ///
    /// # Errors
    ///
    /// The service's own [`IdentityError`], or
    /// [`IdentityError::Unavailable`] when it cannot be reached.
    pub async fn authorize(
        &self,
        correlation: Option<CorrelationId>,
        user: &str,
        password: &str,
    ) -> Result<String, IdentityError> {
        let request = self
            .client
            .post(format!("{}/authorize", self.base_url))
            .json(&AuthorizeRequest {
                user: user.to_owned(),
                password: password.to_owned(),
            });
        let response = send(propagate(request, correlation)).await?;
        let body: AuthorizeResponse = decode(response).await?;
        Ok(body.token)
    }

    /// Verify a token; returns the user it is bound to.
    ///
    /// # Errors
    ///
    /// The service's own [`IdentityError`], or
    /// [`IdentityError::Unavailable`] when it cannot be reached.
    pub async fn validate(
        &self,
        correlation: Option<CorrelationId>,
        token: &str,
    ) -> Result<String, IdentityError> {
        let request = self
            .client
            .post(format!("{}/validate", self.base_url))
            .bearer_auth(token);
        let response = send(propagate(request, correlation)).await?;
        let body: ValidateResponse = decode(response).await?;
        Ok(body.user)
    }

    /// Create an account.
    ///
    /// # Errors
    ///
    /// The service's own [`IdentityError`], or
    /// [`IdentityError::Unavailable`] when it cannot be reached.
    pub async fn create(
        &self,
        correlation: Option<CorrelationId>,
        user: &str,
        password: &str,
    ) -> Result<(), IdentityError> {
        let request = self
            .client
            .post(format!("{}/create", self.base_url))
            .json(&CreateRequest {
                user: user.to_owned(),
                password: password.to_owned(),
            });
        let response = send(propagate(request, correlation)).await?;
        if response.status().is_success() {
            return Ok(());
        }
        Err(wire_error(response).await)
    }
}

async fn send(request: reqwest::RequestBuilder) -> Result<reqwest::Response, IdentityError> {
    request
        .send()
        .await
        .map_err(|err| IdentityError::Unavailable(err.to_string()))
}

async fn decode<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, IdentityError> {
    if !response.status().is_success() {
        return Err(wire_error(response).await);
    }
    response
        .json()
        .await
        .map_err(|err| IdentityError::Internal(format!("malformed identity response: {err}")))
}

async fn wire_error(response: reqwest::Response) -> IdentityError {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => IdentityError::from_wire(&body.code, &body.message),
        Err(_) if status == StatusCode::SERVICE_UNAVAILABLE => {
            IdentityError::Unavailable(status.to_string())
        }
        Err(_) => IdentityError::Internal(format!("identity service returned {status}")),
    }
}
