//! Persisted view of a room's bookings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One room's bookings as loaded from or written to the inventory store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    /// Positional identity of the room (0-based).
    pub room_index: usize,
    /// Date→occupant entries. Never mutated or deleted once written.
    pub bookings: Vec<(NaiveDate, String)>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;

    #[test]
    fn test_serde_roundtrip() {
        let snapshot = RoomSnapshot {
            room_index: 1,
            bookings: vec![("2020-06-13".parse().unwrap(), "alice".into())],
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: RoomSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }
}
