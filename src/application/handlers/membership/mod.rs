//! Joining clubs and expiring memberships.

mod expire_membership;
mod join_free_club;

pub use expire_membership::{ExpireMembershipCommand, ExpireMembershipHandler};
pub use join_free_club::{JoinFreeClubCommand, JoinFreeClubHandler};
