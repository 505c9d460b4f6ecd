//! Read-only listings and detail lookups behind the public and admin
//! browse routes.

mod clubs;
mod events;
mod payments;
mod users;

pub use clubs::{
    GetClubHandler, ListClubsHandler, ListFeaturedClubsHandler, ListManagedClubsHandler,
    FEATURED_CLUB_LIMIT,
};
pub use events::{GetEventHandler, ListEventsHandler, ListEventsQuery};
pub use payments::ListPaymentsHandler;
pub use users::ListUsersHandler;
