//! Event registrations.

mod aggregate;
mod status;

pub use aggregate::Registration;
pub use status::RegistrationStatus;
