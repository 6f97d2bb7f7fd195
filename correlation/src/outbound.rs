//! Outbound propagation onto remote calls.

use crate::id::CorrelationId;
use crate::middleware::CORRELATION_ID_HEADER;

/// Serialize the correlation identifier onto an outbound request.
///
/// Call this on every remote call made while servicing a request so the
/// receiving service can restore the same identifier. A `None` context
/// leaves the request untouched.
#[must_use]
pub fn propagate(
    builder: reqwest::RequestBuilder,
    correlation: Option<CorrelationId>,
) -> reqwest::RequestBuilder {
    match correlation {
        Some(id) => builder.header(CORRELATION_ID_HEADER, id.to_string()),
        None => builder,
    }
}
