//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - bearer token verification (JWKS, mock)
//! - `http` - axum routers, middleware and DTOs
//! - `memory` - in-memory store for tests and local runs
//! - `postgres` - sqlx repositories
//! - `stripe` - hosted checkout gateway

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod stripe;
