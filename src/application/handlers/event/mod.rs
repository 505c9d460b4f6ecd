//! Event scheduling and management for club managers.

mod create_event;
mod delete_event;
mod list_event_registrations;
mod update_event;

pub use create_event::{CreateEventCommand, CreateEventHandler, NO_MANAGED_CLUB_MESSAGE};
pub use delete_event::{DeleteEventCommand, DeleteEventHandler};
pub use list_event_registrations::{ListEventRegistrationsHandler, ListEventRegistrationsQuery};
pub use update_event::{UpdateEventCommand, UpdateEventHandler};
