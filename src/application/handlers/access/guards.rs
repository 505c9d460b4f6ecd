//! Guard functions composed by the HTTP middleware.
//!
//! Each guard yields a [`GuardOutcome`]. `authenticate` establishes who is
//! calling; `require_role` must run after it and checks what they may do.
//! Neither writes anything.

use crate::domain::foundation::{AccessDenied, AuthError, GuardOutcome, Principal};
use crate::domain::user::Role;
use crate::ports::TokenVerifier;

use super::ResolveRoleHandler;

pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized access";
pub const FORBIDDEN_MESSAGE: &str = "Forbidden access";

/// Extracts the credential from an `Authorization: Bearer <token>` value.
pub fn bearer_token(authorization: Option<&str>) -> Result<&str, AuthError> {
    let value = authorization.ok_or(AuthError::MissingCredential)?;
    let (scheme, token) = value
        .trim()
        .split_once(' ')
        .ok_or(AuthError::MalformedCredential)?;
    let token = token.trim();
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return Err(AuthError::MalformedCredential);
    }
    Ok(token)
}

/// Verifies the bearer credential. Every failure, including a verifier
/// outage, rejects as unauthorized.
pub async fn authenticate(
    verifier: &dyn TokenVerifier,
    authorization: Option<&str>,
) -> GuardOutcome {
    let verified = match bearer_token(authorization) {
        Ok(token) => verifier.verify(token).await,
        Err(e) => Err(e),
    };

    match verified {
        Ok(principal) => GuardOutcome::Continue(principal),
        Err(e) => {
            if e.is_transient() {
                tracing::error!(error = %e, "Token verification unavailable");
            } else {
                tracing::debug!(error = %e, "Token rejected");
            }
            GuardOutcome::Reject(AccessDenied::unauthorized(UNAUTHORIZED_MESSAGE))
        }
    }
}

/// Requires an authenticated principal whose stored role is `role`.
pub async fn require_role(
    resolver: &ResolveRoleHandler,
    principal: Option<Principal>,
    role: Role,
) -> GuardOutcome {
    let Some(principal) = principal else {
        return GuardOutcome::Reject(AccessDenied::unauthorized(UNAUTHORIZED_MESSAGE));
    };

    match resolver.handle(&principal.email).await {
        Ok(Some(user)) if user.has_role(role) => GuardOutcome::Continue(principal),
        Ok(_) => {
            tracing::debug!(email = %principal.email, required = role.as_str(), "Role check failed");
            GuardOutcome::Reject(AccessDenied::forbidden(FORBIDDEN_MESSAGE))
        }
        Err(e) => {
            tracing::error!(error = %e, "Role resolution failed");
            GuardOutcome::Reject(AccessDenied::from(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::adapters::auth::MockTokenVerifier;
    use crate::application::handlers::test_support::{email, seed_user, store};

    fn verifier() -> MockTokenVerifier {
        MockTokenVerifier::new()
            .with_email("good", email("ada@example.com"))
            .with_expired("old")
    }

    #[test]
    fn bearer_token_parsing() {
        assert_eq!(bearer_token(Some("Bearer abc")).unwrap(), "abc");
        assert_eq!(bearer_token(Some("bearer  abc ")).unwrap(), "abc");
        assert!(matches!(bearer_token(None), Err(AuthError::MissingCredential)));
        assert!(matches!(
            bearer_token(Some("Basic abc")),
            Err(AuthError::MalformedCredential)
        ));
        assert!(matches!(
            bearer_token(Some("Bearer")),
            Err(AuthError::MalformedCredential)
        ));
    }

    #[tokio::test]
    async fn authenticate_accepts_valid_token() {
        let outcome = authenticate(&verifier(), Some("Bearer good")).await;
        let principal = outcome.into_result().unwrap();
        assert_eq!(principal.email, email("ada@example.com"));
    }

    #[tokio::test]
    async fn authenticate_rejects_every_failure_as_unauthorized() {
        for header in [None, Some("Token good"), Some("Bearer old"), Some("Bearer nope")] {
            let outcome = authenticate(&verifier(), header).await;
            assert_eq!(
                outcome,
                GuardOutcome::Reject(AccessDenied::unauthorized(UNAUTHORIZED_MESSAGE))
            );
        }

        let down = MockTokenVerifier::new().with_error(AuthError::service_unavailable("jwks"));
        let outcome = authenticate(&down, Some("Bearer good")).await;
        assert!(matches!(outcome, GuardOutcome::Reject(AccessDenied::Unauthorized(_))));
    }

    #[tokio::test]
    async fn require_role_checks_stored_role() {
        let store = store();
        seed_user(&store, "admin@example.com", Role::Admin).await;
        seed_user(&store, "member@example.com", Role::Member).await;
        let resolver = ResolveRoleHandler::new(store);

        let admin = Principal::new("a", email("admin@example.com"));
        let member = Principal::new("m", email("member@example.com"));
        let stranger = Principal::new("s", email("who@example.com"));

        assert!(require_role(&resolver, Some(admin), Role::Admin).await.is_continue());
        assert_eq!(
            require_role(&resolver, Some(member), Role::Admin).await,
            GuardOutcome::Reject(AccessDenied::forbidden(FORBIDDEN_MESSAGE))
        );
        assert_eq!(
            require_role(&resolver, Some(stranger), Role::Manager).await,
            GuardOutcome::Reject(AccessDenied::forbidden(FORBIDDEN_MESSAGE))
        );
    }

    #[tokio::test]
    async fn require_role_without_principal_is_unauthorized() {
        let resolver = ResolveRoleHandler::new(store());
        assert_eq!(
            require_role(&resolver, None, Role::Admin).await,
            GuardOutcome::Reject(AccessDenied::unauthorized(UNAUTHORIZED_MESSAGE))
        );
    }

    #[tokio::test]
    async fn store_failure_is_upstream() {
        let store = store();
        store.set_unavailable(true);
        let resolver = ResolveRoleHandler::new(store.clone());
        let principal = Principal::new("a", email("admin@example.com"));

        let outcome = require_role(&resolver, Some(principal), Role::Admin).await;
        assert!(matches!(outcome, GuardOutcome::Reject(AccessDenied::Upstream(_))));
    }
}
