//! CreateClubHandler - Command handler for managers opening a new club.

use std::sync::Arc;

use crate::domain::club::{Club, NewClub};
use crate::domain::foundation::{DomainError, Email};
use crate::ports::ClubRepository;

#[derive(Debug, Clone)]
pub struct CreateClubCommand {
    /// Verified caller; becomes the club's manager.
    pub manager_email: Email,
    pub club: NewClub,
}

pub struct CreateClubHandler {
    clubs: Arc<dyn ClubRepository>,
}

impl CreateClubHandler {
    pub fn new(clubs: Arc<dyn ClubRepository>) -> Self {
        Self { clubs }
    }

    pub async fn handle(&self, cmd: CreateClubCommand) -> Result<Club, DomainError> {
        let club = Club::create(cmd.manager_email, cmd.club)?;
        self.clubs.create(&club).await?;

        tracing::info!(club_id = %club.id, manager = %club.manager_email, "Club created");
        Ok(club)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{email, store};
    use crate::domain::club::ClubStatus;
    use crate::domain::foundation::ErrorCode;

    #[tokio::test]
    async fn new_club_is_pending_and_owned_by_caller() {
        let store = store();
        let handler = CreateClubHandler::new(store.clone());

        let club = handler
            .handle(CreateClubCommand {
                manager_email: email("mgr@example.com"),
                club: NewClub {
                    club_name: "Chess Circle".to_string(),
                    membership_fee: 12.5,
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(club.status, ClubStatus::Pending);
        assert_eq!(club.manager_email, email("mgr@example.com"));
        let stored = store.find_by_id(&club.id).await.unwrap().unwrap();
        assert_eq!(stored, club);
    }

    #[tokio::test]
    async fn blank_name_is_rejected_without_writing() {
        let store = store();
        let handler = CreateClubHandler::new(store.clone());

        let err = handler
            .handle(CreateClubCommand {
                manager_email: email("mgr@example.com"),
                club: NewClub {
                    club_name: "   ".to_string(),
                    ..Default::default()
                },
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let all = store
            .list(&crate::ports::ClubFilter::all(), crate::ports::ListOptions::default())
            .await
            .unwrap();
        assert!(all.is_empty());
    }
}
