//! Identity service for the booking platform.
//!
//! Issues and verifies opaque identity tokens bound to a user name and
//! expiry, and manages the account directory behind them. Other services
//! treat tokens as opaque strings and consume this service through the
//! `Validate` contract only.
//!
//! The crate ships both sides of the remote boundary:
//!
//! - [`service::IdentityService`] plus [`http::router`]: the serving
//!   process (`src/main.rs` binary);
//! - [`client::IdentityClient`]: the reqwest client other services use,
//!   which decodes wire error codes back into [`error::IdentityError`]
//!   so callers see the same taxonomy on both sides of the wire.

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod service;
pub mod token;
pub mod users;
pub mod wire;

pub use client::IdentityClient;
pub use error::IdentityError;
pub use service::IdentityService;
pub use token::{JwtCodec, TokenCodec, TokenError};
pub use users::{MemoryUserStore, UserStore};
