//! PostgreSQL-backed inventory store.
//!
//! One append-only `bookings` table; the (room, date) primary key backs
//! up the in-memory at-most-one-winner invariant at the storage layer,
//! but the ledger, not the database, is authoritative for availability.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Row};

use booking_ledger::RoomSnapshot;

use crate::store::{InventoryStore, StoreError};

/// Inventory store backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Connect to the database at `url` and ensure the schema exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the database cannot be
    /// reached and [`StoreError::Query`] when schema setup fails.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let pool = PgPool::connect(url)
            .await
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS bookings (
                room_index BIGINT NOT NULL,
                booked_date DATE NOT NULL,
                occupant TEXT NOT NULL,
                PRIMARY KEY (room_index, booked_date)
            )",
        )
        .execute(&pool)
        .await
        .map_err(|err| StoreError::Query(err.to_string()))?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl InventoryStore for PostgresStore {
    async fn load_rooms(&self) -> Result<Vec<RoomSnapshot>, StoreError> {
        let rows = sqlx::query(
            "SELECT room_index, booked_date, occupant FROM bookings ORDER BY room_index, booked_date",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|err| StoreError::Query(err.to_string()))?;

        let mut snapshots: Vec<RoomSnapshot> = Vec::new();
        for row in rows {
            let room_index: i64 = row
                .try_get("room_index")
                .map_err(|err| StoreError::Query(err.to_string()))?;
            let date: NaiveDate = row
                .try_get("booked_date")
                .map_err(|err| StoreError::Query(err.to_string()))?;
            let occupant: String = row
                .try_get("occupant")
                .map_err(|err| StoreError::Query(err.to_string()))?;

            let room_index = usize::try_from(room_index)
                .map_err(|err| StoreError::Query(err.to_string()))?;
            match snapshots.last_mut() {
                Some(last) if last.room_index == room_index => {
                    last.bookings.push((date, occupant));
                }
                _ => snapshots.push(RoomSnapshot {
                    room_index,
                    bookings: vec![(date, occupant)],
                }),
            }
        }
        Ok(snapshots)
    }

    async fn append_booking(
        &self,
        room_index: usize,
        date: NaiveDate,
        occupant: &str,
    ) -> Result<(), StoreError> {
        let room_index = i64::try_from(room_index)
            .map_err(|err| StoreError::Query(err.to_string()))?;
        sqlx::query("INSERT INTO bookings (room_index, booked_date, occupant) VALUES ($1, $2, $3)")
            .bind(room_index)
            .bind(date)
            .bind(occupant)
            .execute(&self.pool)
            .await
            .map_err(|err| StoreError::Query(err.to_string()))?;
        Ok(())
    }
}
