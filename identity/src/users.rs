//! The account directory behind the identity service.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::error::IdentityError;

/// Durable record of user accounts, supplied as an interchangeable
/// implementation at construction.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up the stored password for `user`.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Internal`] when the store itself fails.
    async fn find(&self, user: &str) -> Result<Option<String>, IdentityError>;

    /// Record a new account.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::UserExists`] for a duplicate name and
    /// [`IdentityError::Internal`] when the store itself fails.
    async fn insert(&self, user: &str, password: &str) -> Result<(), IdentityError>;
}

/// In-memory account directory.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    accounts: RwLock<HashMap<String, String>>,
}

impl MemoryUserStore {
    /// An empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A directory pre-seeded with `(user, password)` pairs.
    #[must_use]
    pub fn with_accounts<I>(accounts: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            accounts: RwLock::new(accounts.into_iter().collect()),
        }
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find(&self, user: &str) -> Result<Option<String>, IdentityError> {
        let accounts = self
            .accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(accounts.get(user).cloned())
    }

    async fn insert(&self, user: &str, password: &str) -> Result<(), IdentityError> {
        let mut accounts = self
            .accounts
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if accounts.contains_key(user) {
            return Err(IdentityError::UserExists);
        }
        accounts.insert(user.to_owned(), password.to_owned());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_then_find() {
        let store = MemoryUserStore::new();
        store.insert("alice", "pw").await.unwrap();
        assert_eq!(store.find("alice").await.unwrap(), Some("pw".into()));
        assert_eq!(store.find("bob").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_insert_fails() {
        let store = MemoryUserStore::new();
        store.insert("alice", "pw").await.unwrap();
        assert_eq!(
            store.insert("alice", "other").await.unwrap_err(),
            IdentityError::UserExists
        );
        // Original password untouched.
        assert_eq!(store.find("alice").await.unwrap(), Some("pw".into()));
    }
}
