//! The identity operations: authorize, validate, create.

use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::info;

use crate::error::IdentityError;
use crate::token::{TokenCodec, TokenError};
use crate::users::UserStore;

/// The Authenticator: issues and verifies identity tokens against the
/// account directory.
///
/// Both collaborators are injected as trait objects so tests can swap in
/// fakes without touching the operations themselves.
pub struct IdentityService {
    codec: Arc<dyn TokenCodec>,
    users: Arc<dyn UserStore>,
    token_ttl: Duration,
}

impl IdentityService {
    /// Wire up the service.
    #[must_use]
    pub fn new(codec: Arc<dyn TokenCodec>, users: Arc<dyn UserStore>, token_ttl: Duration) -> Self {
        Self {
            codec,
            users,
            token_ttl,
        }
    }

    /// Check credentials and issue a token.
    ///
    /// A missing user and a wrong password are deliberately
    /// indistinguishable to the caller.
    ///
    /// # Errors
    ///
    /// [`IdentityError::InvalidCredentials`] on either miss;
    /// [`IdentityError::Internal`] when token signing fails.
    pub async fn authorize(&self, user: &str, password: &str) -> Result<String, IdentityError> {
        info!(user, "authorize attempt");
        let stored = self.users.find(user).await?;
        if stored.as_deref() != Some(password) {
            return Err(IdentityError::InvalidCredentials);
        }
        self.codec
            .encode(user, Utc::now() + self.token_ttl)
            .map_err(|err| IdentityError::Internal(err.to_string()))
    }

    /// Verify a token and confirm its subject still exists.
    ///
    /// # Errors
    ///
    /// [`IdentityError::InvalidToken`] / [`IdentityError::ExpiredToken`]
    /// from the codec; [`IdentityError::UserNotFound`] when the subject
    /// has vanished from the directory since the token was minted.
    pub async fn validate(&self, token: &str) -> Result<String, IdentityError> {
        info!("validate attempt");
        let user = self.codec.decode(token).map_err(|err| match err {
            TokenError::Expired => IdentityError::ExpiredToken,
            TokenError::Invalid | TokenError::InvalidExpiry => IdentityError::InvalidToken,
        })?;

        if self.users.find(&user).await?.is_none() {
            return Err(IdentityError::UserNotFound);
        }
        Ok(user)
    }

    /// Create a new account.
    ///
    /// # Errors
    ///
    /// [`IdentityError::UserExists`] for a duplicate name.
    pub async fn create(&self, user: &str, password: &str) -> Result<(), IdentityError> {
        info!(user, "create attempt");
        self.users.insert(user, password).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;
    use crate::token::JwtCodec;
    use crate::users::MemoryUserStore;

    fn service() -> IdentityService {
        let users = MemoryUserStore::with_accounts([("alice".to_owned(), "pw".to_owned())]);
        IdentityService::new(
            Arc::new(JwtCodec::new("test-secret")),
            Arc::new(users),
            Duration::hours(1),
        )
    }

    #[tokio::test]
    async fn test_authorize_then_validate() {
        let service = service();
        let token = service.authorize("alice", "pw").await.unwrap();
        assert_eq!(service.validate(&token).await.unwrap(), "alice");
    }

    #[tokio::test]
    async fn test_authorize_wrong_password() {
        let service = service();
        assert_eq!(
            service.authorize("alice", "wrong").await.unwrap_err(),
            IdentityError::InvalidCredentials
        );
    }

    #[tokio::test]
    async fn test_authorize_unknown_user() {
        let service = service();
        assert_eq!(
            service.authorize("mallory", "pw").await.unwrap_err(),
            IdentityError::InvalidCredentials
        );
    }

    #[tokio::test]
    async fn test_validate_garbage_token() {
        let service = service();
        assert_eq!(
            service.validate("garbage").await.unwrap_err(),
            IdentityError::InvalidToken
        );
    }

    #[tokio::test]
    async fn test_validate_token_for_vanished_user() {
        // Token minted by a service that knew the user, validated by one
        // that doesn't.
        let minting = service();
        let token = minting.authorize("alice", "pw").await.unwrap();

        let empty = IdentityService::new(
            Arc::new(JwtCodec::new("test-secret")),
            Arc::new(MemoryUserStore::new()),
            Duration::hours(1),
        );
        assert_eq!(
            empty.validate(&token).await.unwrap_err(),
            IdentityError::UserNotFound
        );
    }

    #[tokio::test]
    async fn test_create_duplicate() {
        let service = service();
        service.create("bob", "pw").await.unwrap();
        assert_eq!(
            service.create("bob", "pw2").await.unwrap_err(),
            IdentityError::UserExists
        );
    }
}
