//! Test doubles for the coordinator's collaborator seams.

use async_trait::async_trait;
use std::collections::HashMap;

use booking_correlation::CorrelationId;
use booking_identity::IdentityError;

use crate::coordinator::Validator;

/// Validator over a fixed token→user table. No remote call involved.
#[derive(Debug, Clone, Default)]
pub struct StaticValidator {
    tokens: HashMap<String, String>,
}

impl StaticValidator {
    /// Build from `(token, user)` pairs.
    #[must_use]
    pub fn new<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            tokens: tokens
                .into_iter()
                .map(|(token, user)| (token.to_owned(), user.to_owned()))
                .collect(),
        }
    }
}

#[async_trait]
impl Validator for StaticValidator {
    async fn validate(
        &self,
        _correlation: Option<CorrelationId>,
        token: &str,
    ) -> Result<String, IdentityError> {
        self.tokens
            .get(token)
            .cloned()
            .ok_or(IdentityError::InvalidToken)
    }
}

/// Validator that always reports the identity service as unreachable.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnreachableValidator;

#[async_trait]
impl Validator for UnreachableValidator {
    async fn validate(
        &self,
        _correlation: Option<CorrelationId>,
        _token: &str,
    ) -> Result<String, IdentityError> {
        Err(IdentityError::Unavailable("connection refused".into()))
    }
}
