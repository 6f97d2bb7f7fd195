//! In-memory inventory store.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use booking_ledger::RoomSnapshot;

use crate::store::{InventoryStore, StoreError};

/// Inventory store backed by process memory.
///
/// Used in development deployments without a database and as the test
/// double for the persistence path; [`MemoryStore::fail_appends`] makes
/// the best-effort-durability contract observable in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    bookings: Mutex<BTreeMap<usize, Vec<(NaiveDate, String)>>>,
    fail_appends: AtomicBool,
}

impl MemoryStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent append fail, as an unreachable store would.
    pub fn fail_appends(&self, fail: bool) {
        self.fail_appends.store(fail, Ordering::SeqCst);
    }

    /// Bookings appended so far, keyed by room index.
    pub fn appended(&self) -> BTreeMap<usize, Vec<(NaiveDate, String)>> {
        self.bookings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl InventoryStore for MemoryStore {
    async fn load_rooms(&self) -> Result<Vec<RoomSnapshot>, StoreError> {
        let bookings = self
            .bookings
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(bookings
            .iter()
            .map(|(room_index, entries)| RoomSnapshot {
                room_index: *room_index,
                bookings: entries.clone(),
            })
            .collect())
    }

    async fn append_booking(
        &self,
        room_index: usize,
        date: NaiveDate,
        occupant: &str,
    ) -> Result<(), StoreError> {
        if self.fail_appends.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("append disabled".into()));
        }
        self.bookings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(room_index)
            .or_default()
            .push((date, occupant.to_owned()));
        Ok(())
    }
}
