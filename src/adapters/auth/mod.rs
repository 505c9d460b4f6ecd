//! Authentication adapters.
//!
//! Implementations of the `TokenVerifier` port:
//!
//! - `jwks` - Production verifier for provider-issued ID tokens
//! - `mock` - Test implementation that doesn't require external services

mod jwks;
mod mock;

pub use jwks::{JwksConfig, JwksTokenVerifier};
pub use mock::MockTokenVerifier;
