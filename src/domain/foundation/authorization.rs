//! Outcomes of access-control guards.
//!
//! Guards run before a handler and either let the request through with the
//! verified [`Principal`] or reject it. A rejection is final: exactly one
//! error response is produced and nothing downstream runs.

use super::{DomainError, ErrorCode, Principal};

/// Why a guard refused a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDenied {
    /// No usable identity (401).
    Unauthorized(String),
    /// Identity known but not allowed (403).
    Forbidden(String),
    /// The guard could not decide because a dependency failed (500).
    Upstream(String),
}

impl AccessDenied {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            AccessDenied::Unauthorized(m) | AccessDenied::Forbidden(m) | AccessDenied::Upstream(m) => m,
        }
    }
}

impl From<DomainError> for AccessDenied {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Unauthorized => AccessDenied::Unauthorized(err.message),
            ErrorCode::Forbidden => AccessDenied::Forbidden(err.message),
            _ => AccessDenied::Upstream(err.to_string()),
        }
    }
}

/// Result of running one guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    Continue(Principal),
    Reject(AccessDenied),
}

impl GuardOutcome {
    pub fn is_continue(&self) -> bool {
        matches!(self, GuardOutcome::Continue(_))
    }

    /// Chains a further guard that only runs when this one passed.
    pub async fn and_then<F, Fut>(self, next: F) -> GuardOutcome
    where
        F: FnOnce(Principal) -> Fut,
        Fut: std::future::Future<Output = GuardOutcome>,
    {
        match self {
            GuardOutcome::Continue(principal) => next(principal).await,
            rejected => rejected,
        }
    }

    pub fn into_result(self) -> Result<Principal, AccessDenied> {
        match self {
            GuardOutcome::Continue(principal) => Ok(principal),
            GuardOutcome::Reject(denied) => Err(denied),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Email;

    fn principal() -> Principal {
        Principal::new("uid", Email::new("m@example.com").unwrap())
    }

    #[tokio::test]
    async fn and_then_skips_next_guard_after_rejection() {
        let mut second_ran = false;
        let rejected = GuardOutcome::Reject(AccessDenied::unauthorized("nope"));
        let outcome = rejected
            .and_then(|p| {
                second_ran = true;
                async move { GuardOutcome::Continue(p) }
            })
            .await;
        assert!(!second_ran);
        assert_eq!(outcome, GuardOutcome::Reject(AccessDenied::unauthorized("nope")));
    }

    #[tokio::test]
    async fn and_then_runs_next_guard_after_continue() {
        let outcome = GuardOutcome::Continue(principal())
            .and_then(|_| async { GuardOutcome::Reject(AccessDenied::forbidden("admin only")) })
            .await;
        assert!(!outcome.is_continue());
        assert_eq!(outcome.into_result().unwrap_err().message(), "admin only");
    }

    #[test]
    fn domain_errors_map_to_denials() {
        let store_failure = DomainError::database("connection reset");
        assert!(matches!(
            AccessDenied::from(store_failure),
            AccessDenied::Upstream(_)
        ));
        let forbidden = DomainError::new(ErrorCode::Forbidden, "Forbidden access");
        assert_eq!(
            AccessDenied::from(forbidden),
            AccessDenied::forbidden("Forbidden access")
        );
    }
}
