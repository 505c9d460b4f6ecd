//! Routes for any signed-in user: registrations, free memberships and the
//! member's own views.

mod dto;
mod handlers;
mod routes;

pub use dto::{JoinClubRequest, RegisterRequest};
pub use routes::member_routes;
