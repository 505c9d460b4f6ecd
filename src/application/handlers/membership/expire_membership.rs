//! ExpireMembershipHandler - Manager command ending a membership in one of
//! their clubs.

use std::sync::Arc;

use crate::domain::foundation::{
    DomainError, Email, ErrorCode, MembershipId, OwnedByUser, StateMachine,
};
use crate::domain::membership::MembershipStatus;
use crate::ports::{ClubRepository, MembershipRepository, UpdateResult};

#[derive(Debug, Clone)]
pub struct ExpireMembershipCommand {
    pub membership_id: MembershipId,
    pub manager_email: Email,
}

pub struct ExpireMembershipHandler {
    clubs: Arc<dyn ClubRepository>,
    memberships: Arc<dyn MembershipRepository>,
}

impl ExpireMembershipHandler {
    pub fn new(clubs: Arc<dyn ClubRepository>, memberships: Arc<dyn MembershipRepository>) -> Self {
        Self { clubs, memberships }
    }

    /// An unknown id matches nothing.
    pub async fn handle(&self, cmd: ExpireMembershipCommand) -> Result<UpdateResult, DomainError> {
        let Some(membership) = self.memberships.find_by_id(&cmd.membership_id).await? else {
            return Ok(UpdateResult::not_found());
        };

        // A membership whose club is gone has no manager left to expire it.
        let club = self
            .clubs
            .find_by_id(&membership.club_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::Forbidden, "Forbidden access"))?;
        club.check_ownership(&cmd.manager_email)?;

        let target = membership.status.transition_to(MembershipStatus::Expired)?;
        let result = self.memberships.set_status(&membership.id, target).await?;
        if result.modified > 0 {
            tracing::info!(membership_id = %membership.id, club_id = %club.id, "Membership expired");
        }
        Ok(result)
    }
}
