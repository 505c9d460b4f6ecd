//! RegisterUserHandler - Command handler that records the caller as a member.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Principal};
use crate::domain::user::User;
use crate::ports::UserRepository;

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub principal: Principal,
    pub name: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RegisterUserResult {
    pub user: User,
    /// False when the user already existed; nothing was written.
    pub inserted: bool,
}

/// Idempotent: a second registration returns the stored user unchanged,
/// so an existing role is never reset to member.
pub struct RegisterUserHandler {
    users: Arc<dyn UserRepository>,
}

impl RegisterUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, cmd: RegisterUserCommand) -> Result<RegisterUserResult, DomainError> {
        let candidate = User::from_principal(&cmd.principal, cmd.name, cmd.photo_url);
        let inserted = self.users.create_if_absent(&candidate).await?;

        if inserted {
            tracing::info!(email = %candidate.email, "User registered");
            return Ok(RegisterUserResult {
                user: candidate,
                inserted,
            });
        }

        let user = self
            .users
            .find_by_email(&candidate.email)
            .await?
            .unwrap_or(candidate);
        Ok(RegisterUserResult { user, inserted })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{email, seed_user, store};
    use crate::domain::user::Role;

    fn command(raw: &str) -> RegisterUserCommand {
        RegisterUserCommand {
            principal: Principal::new("uid", email(raw)).with_display_name("Ada"),
            name: None,
            photo_url: None,
        }
    }

    #[tokio::test]
    async fn first_registration_creates_member() {
        let handler = RegisterUserHandler::new(store());
        let result = handler.handle(command("ada@example.com")).await.unwrap();

        assert!(result.inserted);
        assert_eq!(result.user.role, Role::Member);
        assert_eq!(result.user.name.as_deref(), Some("Ada"));
    }

    #[tokio::test]
    async fn repeat_registration_keeps_existing_role() {
        let store = store();
        seed_user(&store, "boss@example.com", Role::Admin).await;
        let handler = RegisterUserHandler::new(store);

        let result = handler.handle(command("boss@example.com")).await.unwrap();
        assert!(!result.inserted);
        assert_eq!(result.user.role, Role::Admin);
    }
}
