//! User registration and role lookup.

mod dto;
mod handlers;
mod routes;

pub use dto::{RegisterUserRequest, RegisterUserResponse, RoleResponse};
pub use routes::user_routes;
