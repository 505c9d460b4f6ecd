//! Membership repository port.

use async_trait::async_trait;

use crate::domain::foundation::{ClubId, DomainError, Email, MembershipId};
use crate::domain::membership::{Membership, MembershipStatus};

use super::{ListOptions, UpdateResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MembershipFilter {
    pub user_email: Option<Email>,
    pub club_ids: Option<Vec<ClubId>>,
    pub status: Option<MembershipStatus>,
}

impl MembershipFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_user(email: &Email) -> Self {
        Self {
            user_email: Some(email.clone()),
            ..Self::default()
        }
    }

    pub fn in_clubs(club_ids: Vec<ClubId>) -> Self {
        Self {
            club_ids: Some(club_ids),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: MembershipStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn matches(&self, membership: &Membership) -> bool {
        self.user_email
            .as_ref()
            .map_or(true, |e| &membership.user_email == e)
            && self
                .club_ids
                .as_ref()
                .map_or(true, |ids| ids.contains(&membership.club_id))
            && self.status.map_or(true, |s| membership.status == s)
    }
}

#[async_trait]
pub trait MembershipRepository: Send + Sync {
    async fn create(&self, membership: &Membership) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &MembershipId) -> Result<Option<Membership>, DomainError>;

    /// The member's active membership in `club_id`, if any.
    async fn find_active(
        &self,
        user_email: &Email,
        club_id: &ClubId,
    ) -> Result<Option<Membership>, DomainError>;

    /// Sorted on `joinedAt`.
    async fn list(
        &self,
        filter: &MembershipFilter,
        options: ListOptions,
    ) -> Result<Vec<Membership>, DomainError>;

    /// Expiring stamps `expiresAt`. `modified: 0` when the status is
    /// unchanged.
    async fn set_status(
        &self,
        id: &MembershipId,
        status: MembershipStatus,
    ) -> Result<UpdateResult, DomainError>;

    async fn count(&self, filter: &MembershipFilter) -> Result<u64, DomainError>;
}
