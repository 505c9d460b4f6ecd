//! Authentication types for the domain layer.
//!
//! A [`Principal`] is the verified identity behind a request. Any identity
//! provider can produce one through the `TokenVerifier` port.

use super::Email;
use thiserror::Error;

/// Identity extracted from a verified bearer token.
///
/// Handlers must take the caller's email from here, never from request
/// bodies or query strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Provider-side subject (`sub` claim).
    pub uid: String,

    pub email: Email,

    pub display_name: Option<String>,

    pub photo_url: Option<String>,
}

impl Principal {
    pub fn new(uid: impl Into<String>, email: Email) -> Self {
        Self {
            uid: uid.into(),
            email,
            display_name: None,
            photo_url: None,
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_photo_url(mut self, url: impl Into<String>) -> Self {
        self.photo_url = Some(url.into());
        self
    }
}

/// Reasons a bearer credential was not accepted.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Missing authorization header")]
    MissingCredential,

    #[error("Malformed authorization header")]
    MalformedCredential,

    /// Bad signature, wrong issuer or audience, missing claims.
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    /// Key fetch or network failure.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::ServiceUnavailable(_))
    }
}
