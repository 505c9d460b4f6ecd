//! User repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Email};
use crate::domain::user::{Role, User};

use super::{ListOptions, UpdateResult};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts `user` unless one with the same email exists.
    ///
    /// Returns `false` when the email was already taken.
    async fn create_if_absent(&self, user: &User) -> Result<bool, DomainError>;

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError>;

    /// Sorted on `createdAt`.
    async fn list(&self, options: ListOptions) -> Result<Vec<User>, DomainError>;

    /// `modified: 0` when the user already has `role`.
    async fn set_role(&self, email: &Email, role: Role) -> Result<UpdateResult, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn UserRepository) {}
    }
}
