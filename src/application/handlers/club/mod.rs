//! Club creation, editing and moderation.

mod create_club;
mod set_club_status;
mod update_club;

pub use create_club::{CreateClubCommand, CreateClubHandler};
pub use set_club_status::{SetClubStatusCommand, SetClubStatusHandler};
pub use update_club::{UpdateClubCommand, UpdateClubHandler};
