//! Remote-call client for the inventory service.

use chrono::NaiveDate;
use std::time::Duration;

use booking_correlation::{propagate, CorrelationId};

use crate::error::BookingError;
use crate::wire::{BookRequest, BookResponse, CheckResponse, ErrorBody};

/// HTTP client for the inventory service.
///
/// Wire error codes are decoded back into [`BookingError`], identity
/// codes included, so the gateway sees the same taxonomy the services
/// raised.
#[derive(Debug, Clone)]
pub struct InventoryClient {
    client: reqwest::Client,
    base_url: String,
}

impl InventoryClient {
    /// Build a client for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Internal`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, BookingError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| BookingError::Internal(err.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Book a room; returns the assigned 0-based room index.
    ///
    /// # Errors
    ///
    /// The coordinator's [`BookingError`], or
    /// [`BookingError::Unavailable`] when the service cannot be reached.
    pub async fn book(
        &self,
        correlation: Option<CorrelationId>,
        token: &str,
        date: NaiveDate,
    ) -> Result<usize, BookingError> {
        let request = self
            .client
            .post(format!("{}/book", self.base_url))
            .json(&BookRequest {
                token: token.to_owned(),
                date,
            });
        let response = send(propagate(request, correlation)).await?;
        let body: BookResponse = decode(response).await?;
        Ok(body.room_index)
    }

    /// Count rooms free for `date`.
    ///
    /// # Errors
    ///
    /// [`BookingError::Unavailable`] when the service cannot be reached.
    pub async fn check(
        &self,
        correlation: Option<CorrelationId>,
        date: NaiveDate,
    ) -> Result<usize, BookingError> {
        let request = self.client.get(format!("{}/check/{date}", self.base_url));
        let response = send(propagate(request, correlation)).await?;
        let body: CheckResponse = decode(response).await?;
        Ok(body.available)
    }
}

async fn send(request: reqwest::RequestBuilder) -> Result<reqwest::Response, BookingError> {
    request
        .send()
        .await
        .map_err(|err| BookingError::Unavailable(err.to_string()))
}

async fn decode<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, BookingError> {
    let status = response.status();
    if !status.is_success() {
        return match response.json::<ErrorBody>().await {
            Ok(body) => Err(BookingError::from_wire(&body.code, &body.message)),
            Err(_) => Err(BookingError::Internal(format!(
                "inventory service returned {status}"
            ))),
        };
    }
    response
        .json()
        .await
        .map_err(|err| BookingError::Internal(format!("malformed inventory response: {err}")))
}
