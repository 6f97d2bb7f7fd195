//! The ledger: a fixed vector of rooms, addressed by index.

use chrono::NaiveDate;

use crate::room::Room;
use crate::snapshot::RoomSnapshot;

/// The authoritative in-memory state of room occupancy.
///
/// Built once at service start, either empty ([`RoomLedger::new`]) or
/// seeded from the inventory store ([`RoomLedger::from_snapshots`]), and
/// lives for the process lifetime. Room identity is the positional index,
/// 0-based, stable for the process lifetime.
#[derive(Debug, Default)]
pub struct RoomLedger {
    rooms: Vec<Room>,
}

impl RoomLedger {
    /// A ledger of `total` empty rooms.
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            rooms: (0..total).map(|_| Room::new()).collect(),
        }
    }

    /// Rebuild a ledger from store snapshots.
    ///
    /// Tolerates an empty snapshot list (fresh inventory). Snapshots
    /// address rooms by index; indices beyond the highest one seen simply
    /// don't exist, and gaps come up as empty rooms.
    #[must_use]
    pub fn from_snapshots(snapshots: Vec<RoomSnapshot>) -> Self {
        Self::seeded(0, snapshots)
    }

    /// A ledger of at least `total` rooms, pre-seeded from snapshots.
    ///
    /// Used at service start when configuration names a room count and
    /// the store may hold bookings for some of them.
    #[must_use]
    pub fn seeded(total: usize, snapshots: Vec<RoomSnapshot>) -> Self {
        let total = snapshots
            .iter()
            .map(|s| s.room_index + 1)
            .max()
            .unwrap_or(0)
            .max(total);
        let mut rooms: Vec<Room> = (0..total).map(|_| Room::new()).collect();
        for snapshot in snapshots {
            if let Some(room) = rooms.get_mut(snapshot.room_index) {
                *room = Room::with_bookings(snapshot.bookings.into_iter().collect());
            }
        }
        Self { rooms }
    }

    /// Number of rooms in the ledger.
    #[must_use]
    pub fn total(&self) -> usize {
        self.rooms.len()
    }

    /// Attempt to claim `date` in the room at `index`.
    ///
    /// Returns `false` for an out-of-range index or an occupied cell.
    pub fn try_reserve(&self, index: usize, date: NaiveDate, occupant: &str) -> bool {
        self.rooms
            .get(index)
            .is_some_and(|room| room.try_reserve(date, occupant))
    }

    /// Count rooms where `date` is currently free.
    ///
    /// A best-effort snapshot, not a transactional count: under
    /// concurrent reservations the result may be stale by the time the
    /// caller acts on it.
    pub fn available(&self, date: NaiveDate) -> usize {
        self.rooms.iter().filter(|room| room.is_free(date)).count()
    }

    /// The rooms, in index order, for callers that scan.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// Snapshot every room for persistence.
    #[must_use]
    pub fn snapshot(&self) -> Vec<RoomSnapshot> {
        self.rooms
            .iter()
            .enumerate()
            .map(|(room_index, room)| RoomSnapshot {
                room_index,
                bookings: room.bookings(),
            })
            .collect()
    }
}
