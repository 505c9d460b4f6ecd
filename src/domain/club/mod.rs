//! Clubs and their moderation lifecycle.

mod aggregate;
mod status;

pub use aggregate::{Club, ClubPatch, NewClub};
pub use status::ClubStatus;
