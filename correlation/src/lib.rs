//! Correlation ID propagation for the booking platform.
//!
//! A single external request fans out across three processes
//! (gateway → inventory → identity). This crate carries one 128-bit
//! identifier through every hop so the whole chain can be stitched
//! together from logs:
//!
//! 1. **Mint** at the gateway edge ([`CorrelationLayer::mint`])
//! 2. **Carry** through in-process call context (request extensions,
//!    the [`Correlation`] extractor)
//! 3. **Serialize** onto outbound remote calls ([`propagate`], the
//!    `X-Correlation-ID` header)
//! 4. **Restore** at each receiving service ([`CorrelationLayer::restore`])
//!
//! Propagation is purely additive: a missing or malformed identifier
//! degrades traceability, never a request. Removing this crate from the
//! call path must not change any business outcome.

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod extractor;
pub mod id;
pub mod middleware;
pub mod outbound;

pub use extractor::Correlation;
pub use id::CorrelationId;
pub use middleware::{CorrelationLayer, CORRELATION_ID_HEADER};
pub use outbound::propagate;
