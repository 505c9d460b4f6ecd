//! ResolveRoleHandler - Query handler mapping a verified email to its user.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Email};
use crate::domain::user::User;
use crate::ports::UserRepository;

/// Looks up the stored user (and so the role) for an email. Pure read.
pub struct ResolveRoleHandler {
    users: Arc<dyn UserRepository>,
}

impl ResolveRoleHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// `Ok(None)` when no user has registered with this email.
    pub async fn handle(&self, email: &Email) -> Result<Option<User>, DomainError> {
        self.users.find_by_email(email).await
    }
}
