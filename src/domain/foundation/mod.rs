//! Foundation module - shared domain primitives.
//!
//! Identifiers, value objects, error types, and the access-control
//! vocabulary used by every ClubHub record.

mod auth;
mod authorization;
mod email;
mod errors;
mod ids;
mod ownership;
mod state_machine;
mod timestamp;

pub use auth::{AuthError, Principal};
pub use authorization::{AccessDenied, GuardOutcome};
pub use email::Email;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ClubId, EventId, MembershipId, PaymentId, RegistrationId};
pub use ownership::OwnedByUser;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
