//! The booking error taxonomy.

use thiserror::Error;

use booking_identity::IdentityError;

/// Errors surfaced by booking operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// The identity check failed. Propagated verbatim, never wrapped:
    /// the coordinator does not mask identity errors.
    #[error(transparent)]
    Identity(#[from] IdentityError),
    /// Every room is taken for the requested date. A normal business
    /// outcome, not a fault.
    #[error("no room available")]
    NoRoomAvailable,
    /// The inventory service could not be reached or timed out.
    #[error("inventory service unavailable: {0}")]
    Unavailable(String),
    /// Anything else.
    #[error("internal inventory error: {0}")]
    Internal(String),
}

impl BookingError {
    /// Stable wire code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Identity(err) => err.code(),
            Self::NoRoomAvailable => "NO_ROOM_AVAILABLE",
            Self::Unavailable(_) => "INVENTORY_UNAVAILABLE",
            Self::Internal(_) => "INVENTORY_INTERNAL",
        }
    }

    /// Reconstruct an error from its wire code and message.
    ///
    /// Identity codes pass through untouched so the caller sees exactly
    /// what the Authenticator raised two hops away.
    #[must_use]
    pub fn from_wire(code: &str, message: &str) -> Self {
        match code {
            "NO_ROOM_AVAILABLE" => Self::NoRoomAvailable,
            "INVENTORY_UNAVAILABLE" => Self::Unavailable(message.to_owned()),
            "INVENTORY_INTERNAL" => Self::Internal(message.to_owned()),
            _ => Self::Identity(IdentityError::from_wire(code, message)),
        }
    }
}
