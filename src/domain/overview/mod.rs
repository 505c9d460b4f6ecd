//! Read models for the admin, manager and member overviews.
//!
//! Records link to each other by stored ids only, so every joined view is
//! built in memory from a [`ReferenceIndex`] and must tolerate references
//! to records that no longer exist.

mod admin;
mod manager;
mod member;
mod reference_index;

pub use admin::{count_members_per_club, AdminOverview, ClubMemberCount, ClubStatusCounts};
pub use manager::ManagerOverview;
pub use member::{MemberOverview, MembershipView, RegistrationView, UpcomingEvent};
pub use reference_index::{distinct, ReferenceIndex, NOT_AVAILABLE, UNKNOWN_CLUB};
