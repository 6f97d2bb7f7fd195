//! Token encoding and decoding.
//!
//! The codec is the only place that knows the token's internal
//! structure. Everything else in the platform treats tokens as opaque
//! strings.

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from token encode/decode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Encode asked to mint a token that is already expired.
    #[error("invalid expiration date")]
    InvalidExpiry,
    /// The token is malformed or its signature does not verify.
    #[error("invalid token")]
    Invalid,
    /// The token's expiry lies in the past.
    #[error("expired token")]
    Expired,
}

/// Codec for identity tokens, injected into the service at construction.
pub trait TokenCodec: Send + Sync {
    /// Mint a token binding `user` until `expires_at`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::InvalidExpiry`] when `expires_at` is already
    /// in the past, [`TokenError::Invalid`] when signing fails.
    fn encode(&self, user: &str, expires_at: DateTime<Utc>) -> Result<String, TokenError>;

    /// Verify a token and return the user it is bound to.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Expired`] for an out-of-date token and
    /// [`TokenError::Invalid`] for anything that fails verification.
    fn decode(&self, token: &str) -> Result<String, TokenError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: i64,
}

/// HMAC-SHA256 JWT codec.
pub struct JwtCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtCodec {
    /// Build a codec around a shared secret.
    #[must_use]
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::default();
        // Day-granular bookings don't need clock-skew forgiveness, and
        // the expiry tests rely on exact cutoffs.
        validation.leeway = 0;
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }
}

impl TokenCodec for JwtCodec {
    fn encode(&self, user: &str, expires_at: DateTime<Utc>) -> Result<String, TokenError> {
        if expires_at <= Utc::now() {
            return Err(TokenError::InvalidExpiry);
        }
        let claims = Claims {
            sub: user.to_owned(),
            exp: expires_at.timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding).map_err(|_| TokenError::Invalid)
    }

    fn decode(&self, token: &str) -> Result<String, TokenError> {
        match decode::<Claims>(token, &self.decoding, &self.validation) {
            Ok(data) => Ok(data.claims.sub),
            Err(err) => match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => Err(TokenError::Expired),
                _ => Err(TokenError::Invalid),
            },
        }
    }
}
