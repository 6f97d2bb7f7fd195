//! In-memory room occupancy ledger.
//!
//! The ledger is the authoritative record of which room is booked for
//! which calendar date while the process is alive. Rooms are created once
//! at service start and identified by their positional index; a
//! (room, date) cell makes exactly one transition, FREE → OCCUPIED, for
//! the lifetime of the process.
//!
//! # Concurrency
//!
//! Every room owns its own guard; there is no global lock. Reservation
//! uses double-checked acquisition (a shared-lock probe, then a re-check
//! under the exclusive lock), so callers only contend on rooms that look
//! free. Availability counts take no exclusive lock at all and may be
//! stale by the time the caller acts on them. `available` is advisory;
//! `try_reserve` is authoritative.

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod ledger;
pub mod room;
pub mod snapshot;

pub use ledger::RoomLedger;
pub use room::Room;
pub use snapshot::RoomSnapshot;
