//! UpdateClubHandler - Command handler for a manager editing their own club.

use std::sync::Arc;

use crate::domain::club::ClubPatch;
use crate::domain::foundation::{ClubId, DomainError, Email, OwnedByUser};
use crate::ports::{ClubRepository, UpdateResult};

#[derive(Debug, Clone)]
pub struct UpdateClubCommand {
    pub club_id: ClubId,
    pub manager_email: Email,
    pub patch: ClubPatch,
}

/// Status, owner and creation time are never taken from the patch.
pub struct UpdateClubHandler {
    clubs: Arc<dyn ClubRepository>,
}

impl UpdateClubHandler {
    pub fn new(clubs: Arc<dyn ClubRepository>) -> Self {
        Self { clubs }
    }

    pub async fn handle(&self, cmd: UpdateClubCommand) -> Result<UpdateResult, DomainError> {
        cmd.patch.validate()?;

        let Some(mut club) = self.clubs.find_by_id(&cmd.club_id).await? else {
            return Ok(UpdateResult::not_found());
        };
        club.check_ownership(&cmd.manager_email)?;

        club.apply(&cmd.patch);
        self.clubs.update(&club).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{email, seed_club, store};
    use crate::domain::club::ClubStatus;
    use crate::domain::foundation::ErrorCode;

    fn rename(club_id: ClubId, by: &str, name: &str) -> UpdateClubCommand {
        UpdateClubCommand {
            club_id,
            manager_email: email(by),
            patch: ClubPatch {
                club_name: Some(name.to_string()),
                ..Default::default()
            },
        }
    }

    #[tokio::test]
    async fn owner_updates_fields_but_not_status() {
        let store = store();
        let club = seed_club(&store, "mgr@example.com", "Old", 0.0, ClubStatus::Approved).await;
        let handler = UpdateClubHandler::new(store.clone());

        let result = handler.handle(rename(club.id, "mgr@example.com", "New")).await.unwrap();
        assert_eq!(result, UpdateResult::modified());

        let stored = store.find_by_id(&club.id).await.unwrap().unwrap();
        assert_eq!(stored.club_name, "New");
        assert_eq!(stored.status, ClubStatus::Approved);
    }

    #[tokio::test]
    async fn other_manager_is_forbidden() {
        let store = store();
        let club = seed_club(&store, "mgr@example.com", "Old", 0.0, ClubStatus::Pending).await;
        let handler = UpdateClubHandler::new(store.clone());

        let err = handler
            .handle(rename(club.id, "intruder@example.com", "Mine"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
        assert_eq!(store.find_by_id(&club.id).await.unwrap().unwrap().club_name, "Old");
    }

    #[tokio::test]
    async fn missing_club_reports_no_match() {
        let handler = UpdateClubHandler::new(store());
        let result = handler
            .handle(rename(ClubId::new(), "mgr@example.com", "Ghost"))
            .await
            .unwrap();
        assert_eq!(result, UpdateResult::not_found());
    }

    #[tokio::test]
    async fn negative_fee_is_rejected() {
        let store = store();
        let club = seed_club(&store, "mgr@example.com", "Old", 0.0, ClubStatus::Pending).await;
        let handler = UpdateClubHandler::new(store);

        let err = handler
            .handle(UpdateClubCommand {
                club_id: club.id,
                manager_email: email("mgr@example.com"),
                patch: ClubPatch {
                    membership_fee: Some(-1.0),
                    ..Default::default()
                },
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
