//! Platform users and their roles.

mod aggregate;
mod role;

pub use aggregate::User;
pub use role::Role;
