//! Mock token verifier for testing.
//!
//! # Example
//!
//! ```ignore
//! use clubhub::adapters::auth::MockTokenVerifier;
//! use clubhub::domain::foundation::Email;
//!
//! let verifier = MockTokenVerifier::new()
//!     .with_email("member-token", Email::new("member@example.com")?);
//! let principal = verifier.verify("member-token").await?;
//! ```

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, Email, Principal};
use crate::ports::TokenVerifier;

/// Maps fixed tokens to principals. Unknown tokens are `InvalidToken`.
#[derive(Debug, Default, Clone)]
pub struct MockTokenVerifier {
    tokens: HashMap<String, Principal>,
    expired: Vec<String>,
    force_error: Option<AuthError>,
}

impl MockTokenVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_principal(mut self, token: impl Into<String>, principal: Principal) -> Self {
        self.tokens.insert(token.into(), principal);
        self
    }

    /// Accepts `token` as `email`, using the local part as uid.
    pub fn with_email(self, token: impl Into<String>, email: Email) -> Self {
        let uid = email
            .as_str()
            .split('@')
            .next()
            .unwrap_or_default()
            .to_string();
        self.with_principal(token, Principal::new(uid, email))
    }

    pub fn with_expired(mut self, token: impl Into<String>) -> Self {
        self.expired.push(token.into());
        self
    }

    /// Every verification fails with `error`.
    pub fn with_error(mut self, error: AuthError) -> Self {
        self.force_error = Some(error);
        self
    }
}

#[async_trait]
impl TokenVerifier for MockTokenVerifier {
    async fn verify(&self, token: &str) -> Result<Principal, AuthError> {
        if let Some(error) = &self.force_error {
            return Err(error.clone());
        }
        if self.expired.iter().any(|t| t == token) {
            return Err(AuthError::TokenExpired);
        }
        self.tokens
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(raw: &str) -> Email {
        Email::new(raw).unwrap()
    }

    #[tokio::test]
    async fn known_token_yields_principal() {
        let verifier = MockTokenVerifier::new().with_email("t", email("ada@example.com"));
        let principal = verifier.verify("t").await.unwrap();
        assert_eq!(principal.uid, "ada");
        assert_eq!(principal.email, email("ada@example.com"));
    }

    #[tokio::test]
    async fn unknown_and_expired_tokens_fail() {
        let verifier = MockTokenVerifier::new().with_expired("old");
        assert!(matches!(verifier.verify("x").await, Err(AuthError::InvalidToken)));
        assert!(matches!(verifier.verify("old").await, Err(AuthError::TokenExpired)));
    }

    #[tokio::test]
    async fn forced_error_wins() {
        let verifier = MockTokenVerifier::new()
            .with_email("t", email("ada@example.com"))
            .with_error(AuthError::service_unavailable("down"));
        assert!(verifier.verify("t").await.unwrap_err().is_transient());
    }
}
