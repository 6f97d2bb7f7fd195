//! A single room: a date→occupant map behind its own guard.

use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// One room's occupancy state.
///
/// Rooms are never moved or copied once the ledger is built: a copied
/// guard would be a distinct, non-cooperating lock. Callers reach a room
/// by index through [`RoomLedger`](crate::RoomLedger).
#[derive(Debug, Default)]
pub struct Room {
    bookings: RwLock<HashMap<NaiveDate, String>>,
}

impl Room {
    /// A fresh room with no bookings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A room pre-seeded with existing bookings (store load path).
    #[must_use]
    pub fn with_bookings(bookings: HashMap<NaiveDate, String>) -> Self {
        Self {
            bookings: RwLock::new(bookings),
        }
    }

    /// Atomically claim `date` for `occupant` if the date is free.
    ///
    /// Double-checked acquisition: a shared-lock probe skips rooms that
    /// are already taken without touching the exclusive guard, then the
    /// claim is re-checked under the write lock because another caller
    /// may have won the race in between. Returns `true` only for the
    /// single caller that commits the FREE → OCCUPIED transition.
    pub fn try_reserve(&self, date: NaiveDate, occupant: &str) -> bool {
        if self.read_guard().contains_key(&date) {
            return false;
        }

        let mut bookings = self.write_guard();
        if bookings.contains_key(&date) {
            // Lost the race between the probe and the acquire.
            return false;
        }
        bookings.insert(date, occupant.to_owned());
        tracing::debug!(%date, occupant, "reservation committed");
        true
    }

    /// Whether `date` is currently free. Weakly consistent.
    pub fn is_free(&self, date: NaiveDate) -> bool {
        !self.read_guard().contains_key(&date)
    }

    /// The occupant recorded for `date`, if any.
    pub fn occupant(&self, date: NaiveDate) -> Option<String> {
        self.read_guard().get(&date).cloned()
    }

    /// All bookings, sorted by date for deterministic output.
    pub fn bookings(&self) -> Vec<(NaiveDate, String)> {
        let mut entries: Vec<_> = self
            .read_guard()
            .iter()
            .map(|(date, occupant)| (*date, occupant.clone()))
            .collect();
        entries.sort_by_key(|(date, _)| *date);
        entries
    }

    // A poisoned guard only means another thread panicked mid-read; the
    // map itself is still coherent (inserts are atomic), so recover it.
    fn read_guard(&self) -> RwLockReadGuard<'_, HashMap<NaiveDate, String>> {
        self.bookings.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, HashMap<NaiveDate, String>> {
        self.bookings
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_reserve_free_room() {
        let room = Room::new();
        assert!(room.try_reserve(date("2020-06-13"), "alice"));
        assert_eq!(room.occupant(date("2020-06-13")), Some("alice".into()));
    }

    #[test]
    fn test_second_reserve_same_date_fails() {
        let room = Room::new();
        assert!(room.try_reserve(date("2020-06-13"), "alice"));
        assert!(!room.try_reserve(date("2020-06-13"), "bob"));
        // First occupant is untouched.
        assert_eq!(room.occupant(date("2020-06-13")), Some("alice".into()));
    }

    #[test]
    fn test_distinct_dates_are_independent() {
        let room = Room::new();
        assert!(room.try_reserve(date("2020-06-13"), "alice"));
        assert!(room.try_reserve(date("2020-06-14"), "bob"));
        assert!(room.is_free(date("2020-06-15")));
    }

    #[test]
    fn test_bookings_sorted_by_date() {
        let room = Room::new();
        room.try_reserve(date("2020-06-14"), "bob");
        room.try_reserve(date("2020-06-13"), "alice");

        let bookings = room.bookings();
        assert_eq!(
            bookings,
            vec![
                (date("2020-06-13"), "alice".into()),
                (date("2020-06-14"), "bob".into()),
            ]
        );
    }
}
