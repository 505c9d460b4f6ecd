//! Member registrations for club events.

mod cancel_registration;
mod register_for_event;

pub use cancel_registration::{CancelRegistrationCommand, CancelRegistrationHandler};
pub use register_for_event::{RegisterForEventCommand, RegisterForEventHandler};
