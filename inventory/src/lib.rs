//! Inventory service for the booking platform.
//!
//! Owns the allocation algorithm: turning a (token, date) pair into
//! either a room assignment or a definitive failure, under concurrent
//! demand, with an at-most-one-winner guarantee per (room, date) cell.
//!
//! Allocation is gated on a remote identity check (the [`Validator`]
//! seam) and followed by best-effort persistence (the
//! [`store::InventoryStore`] seam). Both collaborators are injected at
//! construction so tests run against fakes.

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod http;
pub mod mocks;
pub mod store;
pub mod stores;
pub mod wire;

pub use client::InventoryClient;
pub use coordinator::{BookingCoordinator, Validator};
pub use error::BookingError;
pub use store::{InventoryStore, StoreError};
pub use stores::MemoryStore;
