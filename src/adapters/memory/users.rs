use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Email};
use crate::domain::user::{Role, User};
use crate::ports::{ListOptions, UpdateResult, UserRepository};

use super::{ordered, InMemoryStore};

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create_if_absent(&self, user: &User) -> Result<bool, DomainError> {
        self.check_available()?;
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Ok(false);
        }
        users.push(user.clone());
        Ok(true)
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError> {
        self.check_available()?;
        let users = self.users.read().await;
        Ok(users.iter().find(|u| &u.email == email).cloned())
    }

    async fn list(&self, options: ListOptions) -> Result<Vec<User>, DomainError> {
        self.check_available()?;
        let users = self.users.read().await.clone();
        Ok(ordered(users, options, |u| u.created_at))
    }

    async fn set_role(&self, email: &Email, role: Role) -> Result<UpdateResult, DomainError> {
        self.check_available()?;
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| &u.email == email) {
            None => Ok(UpdateResult::not_found()),
            Some(user) if user.role == role => Ok(UpdateResult::unchanged()),
            Some(user) => {
                user.role = role;
                Ok(UpdateResult::modified())
            }
        }
    }

    async fn count(&self) -> Result<u64, DomainError> {
        self.check_available()?;
        Ok(self.users.read().await.len() as u64)
    }
}
