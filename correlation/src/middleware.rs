//! Tower middleware for correlation ID tracking.
//!
//! Two modes cover the platform's two kinds of edges:
//!
//! - [`CorrelationLayer::mint`]: the system's entry edge (the gateway).
//!   Reuses a well-formed inbound `X-Correlation-ID` header or mints a
//!   fresh identifier, so every external request has one.
//! - [`CorrelationLayer::restore`]: service-internal edges (identity,
//!   inventory). Restores the identifier from the inbound header if
//!   present; a missing or malformed header is logged and the request
//!   proceeds without one. Tracing never gates admission.
//!
//! In both modes the identifier (when present) is stored in request
//! extensions, recorded on the request span, and echoed back on the
//! response header.

use axum::{extract::Request, http::HeaderValue, response::Response};
use std::task::{Context, Poll};
use tower::{Layer, Service};
use tracing::Instrument;

use crate::id::CorrelationId;

/// The single reserved metadata key carrying the correlation identifier
/// on every remote call.
pub const CORRELATION_ID_HEADER: &str = "X-Correlation-ID";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Entry edge: always end up with an identifier.
    Mint,
    /// Interior edge: restore if the caller sent one, otherwise proceed.
    Restore,
}

/// Layer that adds correlation ID tracking to all requests.
#[derive(Clone, Debug)]
pub struct CorrelationLayer {
    mode: Mode,
}

impl CorrelationLayer {
    /// Layer for the system's entry edge: reuse or mint an identifier.
    #[must_use]
    pub const fn mint() -> Self {
        Self { mode: Mode::Mint }
    }

    /// Layer for service-internal edges: restore the inbound identifier
    /// if present, proceed without one otherwise.
    #[must_use]
    pub const fn restore() -> Self {
        Self { mode: Mode::Restore }
    }
}

impl<S> Layer<S> for CorrelationLayer {
    type Service = CorrelationMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CorrelationMiddleware {
            inner,
            mode: self.mode,
        }
    }
}

/// Middleware service for correlation ID tracking.
#[derive(Clone, Debug)]
pub struct CorrelationMiddleware<S> {
    inner: S,
    mode: Mode,
}

impl<S> Service<Request> for CorrelationMiddleware<S>
where
    S: Service<Request, Response = Response> + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request) -> Self::Future {
        let inbound = req
            .headers()
            .get(CORRELATION_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<CorrelationId>().ok());

        let correlation = match (self.mode, inbound) {
            (_, Some(id)) => Some(id),
            (Mode::Mint, None) => Some(CorrelationId::mint()),
            (Mode::Restore, None) => {
                // Best-effort tracing: note the gap, admit the request.
                tracing::debug!("no correlation id on inbound request");
                None
            }
        };

        if let Some(id) = correlation {
            req.extensions_mut().insert(id);
        }

        let span = match correlation {
            Some(id) => tracing::info_span!(
                "request",
                correlation_id = %id,
                method = %req.method(),
                uri = %req.uri(),
            ),
            None => tracing::info_span!(
                "request",
                correlation_id = tracing::field::Empty,
                method = %req.method(),
                uri = %req.uri(),
            ),
        };

        let fut = self.inner.call(req);

        Box::pin(async move {
            let mut response = fut.instrument(span).await?;

            if let Some(id) = correlation {
                if let Ok(value) = HeaderValue::from_str(&id.to_string()) {
                    response.headers_mut().insert(CORRELATION_ID_HEADER, value);
                }
            }

            Ok(response)
        })
    }
}
