//! SetUserRoleHandler - Admin command that changes a user's role.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Email};
use crate::domain::user::Role;
use crate::ports::{UpdateResult, UserRepository};

#[derive(Debug, Clone)]
pub struct SetUserRoleCommand {
    pub email: Email,
    pub role: Role,
}

pub struct SetUserRoleHandler {
    users: Arc<dyn UserRepository>,
}

impl SetUserRoleHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Unknown emails report `matched: 0`.
    pub async fn handle(&self, cmd: SetUserRoleCommand) -> Result<UpdateResult, DomainError> {
        let result = self.users.set_role(&cmd.email, cmd.role).await?;
        if result.modified > 0 {
            tracing::info!(email = %cmd.email, role = cmd.role.as_str(), "User role changed");
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{email, seed_user, store};

    #[tokio::test]
    async fn promotes_then_reports_unchanged() {
        let store = store();
        seed_user(&store, "m@example.com", Role::Member).await;
        let handler = SetUserRoleHandler::new(store);
        let cmd = SetUserRoleCommand {
            email: email("m@example.com"),
            role: Role::Manager,
        };

        assert_eq!(handler.handle(cmd.clone()).await.unwrap(), UpdateResult::modified());
        assert_eq!(handler.handle(cmd).await.unwrap(), UpdateResult::unchanged());
    }
}
