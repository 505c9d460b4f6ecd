use async_trait::async_trait;

use crate::domain::foundation::{ClubId, DomainError, Email, MembershipId, Timestamp};
use crate::domain::membership::{Membership, MembershipStatus};
use crate::ports::{ListOptions, MembershipFilter, MembershipRepository, UpdateResult};

use super::{ordered, InMemoryStore};

#[async_trait]
impl MembershipRepository for InMemoryStore {
    async fn create(&self, membership: &Membership) -> Result<(), DomainError> {
        self.check_available()?;
        self.memberships.write().await.push(membership.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &MembershipId) -> Result<Option<Membership>, DomainError> {
        self.check_available()?;
        let memberships = self.memberships.read().await;
        Ok(memberships.iter().find(|m| &m.id == id).cloned())
    }

    async fn find_active(
        &self,
        user_email: &Email,
        club_id: &ClubId,
    ) -> Result<Option<Membership>, DomainError> {
        self.check_available()?;
        let memberships = self.memberships.read().await;
        Ok(memberships
            .iter()
            .find(|m| &m.user_email == user_email && &m.club_id == club_id && m.is_active())
            .cloned())
    }

    async fn list(
        &self,
        filter: &MembershipFilter,
        options: ListOptions,
    ) -> Result<Vec<Membership>, DomainError> {
        self.check_available()?;
        let memberships: Vec<Membership> = self
            .memberships
            .read()
            .await
            .iter()
            .filter(|m| filter.matches(m))
            .cloned()
            .collect();
        Ok(ordered(memberships, options, |m| m.joined_at))
    }

    async fn set_status(
        &self,
        id: &MembershipId,
        status: MembershipStatus,
    ) -> Result<UpdateResult, DomainError> {
        self.check_available()?;
        let mut memberships = self.memberships.write().await;
        match memberships.iter_mut().find(|m| &m.id == id) {
            None => Ok(UpdateResult::not_found()),
            Some(m) if m.status == status => Ok(UpdateResult::unchanged()),
            Some(m) => {
                m.status = status;
                if status == MembershipStatus::Expired {
                    m.expires_at = Some(Timestamp::now());
                }
                Ok(UpdateResult::modified())
            }
        }
    }

    async fn count(&self, filter: &MembershipFilter) -> Result<u64, DomainError> {
        self.check_available()?;
        let memberships = self.memberships.read().await;
        Ok(memberships.iter().filter(|m| filter.matches(m)).count() as u64)
    }
}
