//! JoinFreeClubHandler - Command handler for joining a club with no fee.

use std::sync::Arc;

use crate::domain::foundation::{ClubId, DomainError, Email, ErrorCode};
use crate::domain::membership::Membership;
use crate::ports::{ClubRepository, MembershipRepository};

#[derive(Debug, Clone)]
pub struct JoinFreeClubCommand {
    pub club_id: ClubId,
    pub user_email: Email,
}

pub struct JoinFreeClubHandler {
    clubs: Arc<dyn ClubRepository>,
    memberships: Arc<dyn MembershipRepository>,
}

impl JoinFreeClubHandler {
    pub fn new(clubs: Arc<dyn ClubRepository>, memberships: Arc<dyn MembershipRepository>) -> Self {
        Self { clubs, memberships }
    }

    pub async fn handle(&self, cmd: JoinFreeClubCommand) -> Result<Membership, DomainError> {
        let club = self
            .clubs
            .find_by_id(&cmd.club_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ClubNotFound, "Club not found"))?;

        if !club.status.is_public() {
            return Err(DomainError::new(
                ErrorCode::ClubNotApproved,
                "Club is not accepting members",
            ));
        }
        if !club.is_free() {
            return Err(DomainError::new(
                ErrorCode::PaymentRequired,
                "This club requires payment",
            ));
        }
        if self
            .memberships
            .find_active(&cmd.user_email, &club.id)
            .await?
            .is_some()
        {
            return Err(DomainError::new(ErrorCode::AlreadyMember, "Already a member"));
        }

        let membership = Membership::activate(cmd.user_email, club.id, None);
        self.memberships.create(&membership).await?;

        tracing::info!(membership_id = %membership.id, club_id = %club.id, "Joined free club");
        Ok(membership)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{email, seed_club, store};
    use crate::domain::club::ClubStatus;
    use crate::domain::membership::MembershipStatus;

    fn command(club_id: ClubId) -> JoinFreeClubCommand {
        JoinFreeClubCommand {
            club_id,
            user_email: email("a@example.com"),
        }
    }

    #[tokio::test]
    async fn joins_free_approved_club_once() {
        let store = store();
        let club = seed_club(&store, "mgr@example.com", "Walkers", 0.0, ClubStatus::Approved).await;
        let handler = JoinFreeClubHandler::new(store.clone(), store.clone());

        let membership = handler.handle(command(club.id)).await.unwrap();
        assert_eq!(membership.status, MembershipStatus::Active);
        assert!(membership.payment_id.is_none());

        let err = handler.handle(command(club.id)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::AlreadyMember);
    }

    #[tokio::test]
    async fn paid_club_requires_payment() {
        let store = store();
        let club = seed_club(&store, "mgr@example.com", "Golf", 90.0, ClubStatus::Approved).await;
        let handler = JoinFreeClubHandler::new(store.clone(), store.clone());

        let err = handler.handle(command(club.id)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::PaymentRequired);
        assert_eq!(err.message, "This club requires payment");
    }

    #[tokio::test]
    async fn pending_club_cannot_be_joined() {
        let store = store();
        let club = seed_club(&store, "mgr@example.com", "New", 0.0, ClubStatus::Pending).await;
        let handler = JoinFreeClubHandler::new(store.clone(), store.clone());

        let err = handler.handle(command(club.id)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ClubNotApproved);
    }
}
