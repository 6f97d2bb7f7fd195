//! Axum extractor for the in-process correlation context.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::id::CorrelationId;

/// Extracts the correlation ID placed in request extensions by
/// [`CorrelationLayer`](crate::CorrelationLayer).
///
/// Yields `None` when the layer is not installed or (in restore mode)
/// the caller sent no identifier. Infallible: a handler must never fail
/// because tracing context is absent.
///
/// # Example
///
/// ```ignore
/// async fn handler(Correlation(correlation): Correlation) -> StatusCode {
///     if let Some(id) = correlation {
///         tracing::info!(correlation_id = %id, "handling request");
///     }
///     StatusCode::OK
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Correlation(pub Option<CorrelationId>);

#[async_trait]
impl<S> FromRequestParts<S> for Correlation
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(parts.extensions.get::<CorrelationId>().copied()))
    }
}
