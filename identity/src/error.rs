//! The identity error taxonomy, shared verbatim across the wire.

use thiserror::Error;

/// Errors surfaced by identity operations.
///
/// These cross the remote boundary as stable string codes (see
/// [`IdentityError::code`]) and are reconstructed unchanged by
/// [`IdentityClient`](crate::IdentityClient), so the booking coordinator
/// can propagate them verbatim without wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// Unknown user or wrong password on authorize.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// The token is malformed or its signature does not verify.
    #[error("invalid token")]
    InvalidToken,
    /// The token was once valid but has expired.
    #[error("expired token")]
    ExpiredToken,
    /// The token's subject no longer exists in the directory.
    #[error("user not found")]
    UserNotFound,
    /// Create attempted for a name that is already taken.
    #[error("user already exists")]
    UserExists,
    /// The identity service could not be reached or timed out.
    #[error("identity service unavailable: {0}")]
    Unavailable(String),
    /// Anything else (token signing failure, store fault).
    #[error("internal identity error: {0}")]
    Internal(String),
}

impl IdentityError {
    /// Stable wire code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::ExpiredToken => "EXPIRED_TOKEN",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::UserExists => "USER_EXISTS",
            Self::Unavailable(_) => "IDENTITY_UNAVAILABLE",
            Self::Internal(_) => "IDENTITY_INTERNAL",
        }
    }

    /// Reconstruct an error from its wire code and message.
    #[must_use]
    pub fn from_wire(code: &str, message: &str) -> Self {
        match code {
            "INVALID_CREDENTIALS" => Self::InvalidCredentials,
            "INVALID_TOKEN" => Self::InvalidToken,
            "EXPIRED_TOKEN" => Self::ExpiredToken,
            "USER_NOT_FOUND" => Self::UserNotFound,
            "USER_EXISTS" => Self::UserExists,
            "IDENTITY_UNAVAILABLE" => Self::Unavailable(message.to_owned()),
            _ => Self::Internal(message.to_owned()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;

    #[test]
    fn test_wire_roundtrip() {
        let errors = [
            IdentityError::InvalidCredentials,
            IdentityError::InvalidToken,
            IdentityError::ExpiredToken,
            IdentityError::UserNotFound,
            IdentityError::UserExists,
        ];
        for err in errors {
            assert_eq!(IdentityError::from_wire(err.code(), ""), err);
        }
    }

    #[test]
    fn test_unknown_code_maps_to_internal() {
        assert_eq!(
            IdentityError::from_wire("SOMETHING_NEW", "boom"),
            IdentityError::Internal("boom".into())
        );
    }
}
