//! Ownership checks for records tied to a single user.
//!
//! Clubs and events are owned by their manager; registrations, memberships
//! and payments by the member. The owning email is always compared against
//! the verified principal.

use super::{DomainError, Email, ErrorCode};

pub trait OwnedByUser {
    fn owner_email(&self) -> &Email;

    fn is_owned_by(&self, email: &Email) -> bool {
        self.owner_email() == email
    }

    /// `Err(Forbidden)` unless `email` owns this record.
    fn check_ownership(&self, email: &Email) -> Result<(), DomainError> {
        if self.is_owned_by(email) {
            Ok(())
        } else {
            Err(DomainError::new(ErrorCode::Forbidden, "Forbidden access")
                .with_detail("owner", self.owner_email().to_string())
                .with_detail("requested_by", email.to_string()))
        }
    }
}
