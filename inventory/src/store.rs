//! The inventory store boundary.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use booking_ledger::RoomSnapshot;

/// Errors from the durable store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// A query or write failed.
    #[error("store operation failed: {0}")]
    Query(String),
}

/// Durable record of rooms and their booked dates.
///
/// Loading at start and appending new bookings are two independent
/// operations; implementations must tolerate empty or absent prior
/// state (a fresh inventory loads as no snapshots).
///
/// Durability is advisory for the booking contract: an append failure
/// after a successful in-memory reservation is reported, never used to
/// unwind the reservation.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Load every room's persisted bookings.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the store cannot be read.
    async fn load_rooms(&self) -> Result<Vec<RoomSnapshot>, StoreError>;

    /// Append one newly created booking.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the write fails.
    async fn append_booking(
        &self,
        room_index: usize,
        date: NaiveDate,
        occupant: &str,
    ) -> Result<(), StoreError>;
}
