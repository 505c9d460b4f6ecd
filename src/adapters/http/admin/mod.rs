//! Administrator routes. Every route requires the `admin` role.

mod dto;
mod handlers;
mod routes;

pub use dto::{SetClubStatusRequest, SetRoleRequest};
pub use routes::admin_routes;
