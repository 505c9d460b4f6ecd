//! HTTP adapter: axum routers, middleware and JSON mapping.
//!
//! Route groups live in one module each (`users`, `clubs`, `events`,
//! `manager`, `member`, `admin`, `checkout`) with their own DTOs, handlers
//! and routes. [`app_router`] merges them and adds the shared tower layers.

pub mod admin;
pub mod checkout;
pub mod clubs;
pub mod error;
pub mod events;
pub mod extract;
pub mod manager;
pub mod member;
pub mod middleware;
pub mod router;
pub mod state;
pub mod summary;
pub mod users;

pub use error::{ApiError, ErrorResponse, INTERNAL_ERROR_MESSAGE};
pub use router::{app_router, LIVENESS_MESSAGE};
pub use state::AppState;
