//! Routes for club managers. Every route requires the `manager` role and
//! is scoped to the caller's own clubs.

mod handlers;
mod routes;

pub use routes::manager_routes;
