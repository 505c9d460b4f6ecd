//! SetClubStatusHandler - Admin moderation of a club.

use std::sync::Arc;

use crate::domain::club::ClubStatus;
use crate::domain::foundation::{ClubId, DomainError, StateMachine};
use crate::ports::{ClubRepository, UpdateResult};

#[derive(Debug, Clone)]
pub struct SetClubStatusCommand {
    pub club_id: ClubId,
    pub status: ClubStatus,
}

pub struct SetClubStatusHandler {
    clubs: Arc<dyn ClubRepository>,
}

impl SetClubStatusHandler {
    pub fn new(clubs: Arc<dyn ClubRepository>) -> Self {
        Self { clubs }
    }

    /// Setting the current status again reports `modified: 0`.
    pub async fn handle(&self, cmd: SetClubStatusCommand) -> Result<UpdateResult, DomainError> {
        let Some(club) = self.clubs.find_by_id(&cmd.club_id).await? else {
            return Ok(UpdateResult::not_found());
        };
        club.status.transition_to(cmd.status)?;

        let result = self.clubs.set_status(&cmd.club_id, cmd.status).await?;
        if result.modified > 0 {
            tracing::info!(
                club_id = %cmd.club_id,
                from = club.status.as_str(),
                to = cmd.status.as_str(),
                "Club status changed"
            );
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{seed_club, store};

    #[tokio::test]
    async fn approving_twice_reports_unchanged() {
        let store = store();
        let club = seed_club(&store, "mgr@example.com", "Chess", 0.0, ClubStatus::Pending).await;
        let handler = SetClubStatusHandler::new(store.clone());
        let cmd = SetClubStatusCommand {
            club_id: club.id,
            status: ClubStatus::Approved,
        };

        assert_eq!(handler.handle(cmd.clone()).await.unwrap(), UpdateResult::modified());
        assert_eq!(handler.handle(cmd).await.unwrap(), UpdateResult::unchanged());
        assert_eq!(
            store.find_by_id(&club.id).await.unwrap().unwrap().status,
            ClubStatus::Approved
        );
    }

    #[tokio::test]
    async fn approved_club_can_be_reset_to_pending() {
        let store = store();
        let club = seed_club(&store, "mgr@example.com", "Chess", 0.0, ClubStatus::Approved).await;
        let handler = SetClubStatusHandler::new(store.clone());

        let result = handler
            .handle(SetClubStatusCommand {
                club_id: club.id,
                status: ClubStatus::Pending,
            })
            .await
            .unwrap();
        assert_eq!(result, UpdateResult::modified());
        assert_eq!(
            store.find_by_id(&club.id).await.unwrap().unwrap().status,
            ClubStatus::Pending
        );
    }

    #[tokio::test]
    async fn unknown_club_reports_no_match() {
        let handler = SetClubStatusHandler::new(store());
        let result = handler
            .handle(SetClubStatusCommand {
                club_id: ClubId::new(),
                status: ClubStatus::Rejected,
            })
            .await
            .unwrap();
        assert_eq!(result, UpdateResult::not_found());
    }
}
