//! The booking coordinator: the allocation algorithm itself.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{info, warn};

use booking_correlation::CorrelationId;
use booking_identity::{IdentityClient, IdentityError};
use booking_ledger::RoomLedger;

use crate::error::BookingError;
use crate::store::InventoryStore;

/// The remote identity check the coordinator gates allocation on.
///
/// Implemented by [`IdentityClient`] in production and by static fakes
/// in tests.
#[async_trait]
pub trait Validator: Send + Sync {
    /// Verify a token; returns the user it is bound to.
    ///
    /// # Errors
    ///
    /// The Authenticator's own [`IdentityError`], including
    /// [`IdentityError::Unavailable`] for timeouts, which must abort
    /// the booking attempt before any reservation is made.
    async fn validate(
        &self,
        correlation: Option<CorrelationId>,
        token: &str,
    ) -> Result<String, IdentityError>;
}

#[async_trait]
impl Validator for IdentityClient {
    async fn validate(
        &self,
        correlation: Option<CorrelationId>,
        token: &str,
    ) -> Result<String, IdentityError> {
        IdentityClient::validate(self, correlation, token).await
    }
}

/// Turns a (token, date) pair into a room assignment or a definitive
/// failure, and answers availability queries.
pub struct BookingCoordinator {
    ledger: RoomLedger,
    validator: Arc<dyn Validator>,
    store: Option<Arc<dyn InventoryStore>>,
}

impl BookingCoordinator {
    /// Wire up the coordinator. `store: None` means a purely in-memory
    /// deployment; bookings then live only for the process lifetime.
    #[must_use]
    pub fn new(
        ledger: RoomLedger,
        validator: Arc<dyn Validator>,
        store: Option<Arc<dyn InventoryStore>>,
    ) -> Self {
        Self {
            ledger,
            validator,
            store,
        }
    }

    /// Book a room for `date` on behalf of the token's user.
    ///
    /// The identity check comes first: a failed or timed-out validation
    /// aborts the attempt before any reservation is made, so ledger
    /// state never mutates for an unvalidated caller. Rooms are then
    /// scanned in ascending index order; losing the guarded race for
    /// one room just moves the scan to the next. The returned index is
    /// 0-based.
    ///
    /// A store failure after the in-memory reservation committed is
    /// logged and swallowed: availability is authoritative from memory,
    /// durability is advisory.
    ///
    /// # Errors
    ///
    /// The Authenticator's error verbatim, or
    /// [`BookingError::NoRoomAvailable`] after a full unsuccessful scan.
    pub async fn book(
        &self,
        correlation: Option<CorrelationId>,
        token: &str,
        date: NaiveDate,
    ) -> Result<usize, BookingError> {
        let user = self.validator.validate(correlation, token).await?;

        for index in 0..self.ledger.total() {
            if !self.ledger.try_reserve(index, date, &user) {
                continue;
            }
            info!(room = index, user = %user, %date, "room booked");
            if let Some(store) = &self.store {
                if let Err(err) = store.append_booking(index, date, &user).await {
                    // Best-effort durability: report, never roll back.
                    warn!(room = index, %date, error = %err, "failed to persist booking");
                }
            }
            return Ok(index);
        }

        info!(%date, "no room available");
        Err(BookingError::NoRoomAvailable)
    }

    /// Count rooms free for `date`. Advisory: the answer may be stale
    /// by the time the caller acts on it. Requires no authentication
    /// and cannot fail.
    #[must_use]
    pub fn check(&self, date: NaiveDate) -> usize {
        self.ledger.available(date)
    }

    /// Total rooms in the ledger.
    #[must_use]
    pub fn total_rooms(&self) -> usize {
        self.ledger.total()
    }
}
