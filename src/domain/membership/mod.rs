//! Club memberships.

mod aggregate;
mod status;

pub use aggregate::Membership;
pub use status::MembershipStatus;
