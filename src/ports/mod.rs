//! Ports - interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application and the outside world. Adapters implement them.
//!
//! - `TokenVerifier` - bearer token verification
//! - one repository per stored collection
//! - `PaymentGateway` - hosted checkout sessions

mod club_repository;
mod event_repository;
mod membership_repository;
mod payment_gateway;
mod payment_repository;
mod query;
mod registration_repository;
mod token_verifier;
mod user_repository;

pub use club_repository::{ClubFilter, ClubRepository};
pub use event_repository::{EventFilter, EventRepository};
pub use membership_repository::{MembershipFilter, MembershipRepository};
pub use payment_gateway::{
    CheckoutMetadata, CheckoutRequest, CheckoutSession, CheckoutSessionDetails, PaymentError,
    PaymentErrorCode, PaymentGateway, SessionPaymentStatus,
};
pub use payment_repository::{PaymentFilter, PaymentRepository};
pub use query::{DeleteResult, ListOptions, SortOrder, UpdateResult};
pub use registration_repository::{RegistrationFilter, RegistrationRepository};
pub use token_verifier::TokenVerifier;
pub use user_repository::UserRepository;
