//! HTTP middleware for axum.
//!
//! - `auth` - bearer authentication, role layers and the principal extractor

pub mod auth;

pub use auth::{require_admin, require_auth, require_manager, CurrentPrincipal};
