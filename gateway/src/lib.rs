//! Public gateway for the booking platform.
//!
//! The system's entry edge: every external request gets a correlation
//! identifier minted here, is structurally validated, and is dispatched
//! to the identity or inventory service. Domain errors coming back over
//! the wire are translated into the transport-level status taxonomy in
//! [`error`].

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod config;
pub mod error;
pub mod server;

pub use error::AppError;
pub use server::{build_router, AppState};
