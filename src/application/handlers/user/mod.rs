//! User registration and role management.

mod register_user;
mod set_user_role;

pub use register_user::{RegisterUserCommand, RegisterUserHandler, RegisterUserResult};
pub use set_user_role::{SetUserRoleCommand, SetUserRoleHandler};
