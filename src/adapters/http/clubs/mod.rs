//! Club browsing and manager-side club editing.

mod dto;
mod handlers;
mod routes;

pub use dto::{ClubListQuery, ClubRequest};
pub use routes::club_routes;
