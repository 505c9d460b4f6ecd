//! Identity token verification port.
//!
//! Implementations must check signature, issuer, audience and expiry, and
//! only then map claims to a [`Principal`]. The HTTP layer calls this once
//! per guarded request.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, Principal};

/// Verifies bearer tokens.
///
/// # Contract
///
/// - `AuthError::InvalidToken` for malformed tokens, bad signatures, wrong
///   issuer or audience, or a missing `email` claim
/// - `AuthError::TokenExpired` for expired tokens
/// - `AuthError::ServiceUnavailable` when keys cannot be fetched
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// `token` is the raw credential without the `Bearer ` prefix.
    async fn verify(&self, token: &str) -> Result<Principal, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Email;

    struct FixedVerifier;

    #[async_trait]
    impl TokenVerifier for FixedVerifier {
        async fn verify(&self, token: &str) -> Result<Principal, AuthError> {
            match token {
                "good" => Ok(Principal::new("uid", Email::new("a@example.com").unwrap())),
                "old" => Err(AuthError::TokenExpired),
                _ => Err(AuthError::InvalidToken),
            }
        }
    }

    #[tokio::test]
    async fn usable_as_trait_object() {
        let verifier: Box<dyn TokenVerifier> = Box::new(FixedVerifier);
        assert!(verifier.verify("good").await.is_ok());
        assert!(matches!(
            verifier.verify("old").await,
            Err(AuthError::TokenExpired)
        ));
        assert!(matches!(
            verifier.verify("junk").await,
            Err(AuthError::InvalidToken)
        ));
    }
}
