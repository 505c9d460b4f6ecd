//! CreateEventHandler - Command handler for scheduling a club event.

use std::sync::Arc;

use crate::domain::club::Club;
use crate::domain::event::{Event, EventDetails};
use crate::domain::foundation::{ClubId, DomainError, Email, ErrorCode, OwnedByUser};
use crate::ports::{ClubFilter, ClubRepository, EventRepository, ListOptions};

pub const NO_MANAGED_CLUB_MESSAGE: &str = "Club not found for this manager";

#[derive(Debug, Clone)]
pub struct CreateEventCommand {
    pub manager_email: Email,
    /// Target club. When absent the manager's oldest club is used.
    pub club_id: Option<ClubId>,
    pub details: EventDetails,
}

pub struct CreateEventHandler {
    clubs: Arc<dyn ClubRepository>,
    events: Arc<dyn EventRepository>,
}

impl CreateEventHandler {
    pub fn new(clubs: Arc<dyn ClubRepository>, events: Arc<dyn EventRepository>) -> Self {
        Self { clubs, events }
    }

    pub async fn handle(&self, cmd: CreateEventCommand) -> Result<Event, DomainError> {
        let club = self.resolve_club(&cmd.manager_email, cmd.club_id).await?;

        let event = Event::schedule(&club, cmd.details)?;
        self.events.create(&event).await?;

        tracing::info!(event_id = %event.id, club_id = %club.id, "Event created");
        Ok(event)
    }

    async fn resolve_club(&self, manager: &Email, club_id: Option<ClubId>) -> Result<Club, DomainError> {
        let club = match club_id {
            Some(id) => self
                .clubs
                .find_by_id(&id)
                .await?
                .filter(|club| club.is_owned_by(manager)),
            None => self
                .clubs
                .list(&ClubFilter::managed_by(manager), ListOptions::oldest_first().with_limit(1))
                .await?
                .into_iter()
                .next(),
        };
        club.ok_or_else(|| DomainError::new(ErrorCode::ClubNotFound, NO_MANAGED_CLUB_MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{email, event_details, seed_club, store};
    use crate::domain::club::ClubStatus;

    fn command(manager: &str, club_id: Option<ClubId>) -> CreateEventCommand {
        CreateEventCommand {
            manager_email: email(manager),
            club_id,
            details: event_details("Open night", 3, 0.0),
        }
    }

    #[tokio::test]
    async fn manager_without_clubs_gets_not_found() {
        let store = store();
        let handler = CreateEventHandler::new(store.clone(), store.clone());

        let err = handler.handle(command("mgr@example.com", None)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ClubNotFound);
        assert_eq!(err.message, NO_MANAGED_CLUB_MESSAGE);
    }

    #[tokio::test]
    async fn defaults_to_oldest_owned_club() {
        let store = store();
        let first = seed_club(&store, "mgr@example.com", "First", 0.0, ClubStatus::Approved).await;
        seed_club(&store, "mgr@example.com", "Second", 0.0, ClubStatus::Approved).await;
        let handler = CreateEventHandler::new(store.clone(), store.clone());

        let event = handler.handle(command("mgr@example.com", None)).await.unwrap();
        assert_eq!(event.club_id, first.id);
        assert_eq!(event.manager_email, email("mgr@example.com"));
    }

    #[tokio::test]
    async fn explicit_club_must_belong_to_caller() {
        let store = store();
        let foreign = seed_club(&store, "other@example.com", "Theirs", 0.0, ClubStatus::Approved).await;
        let handler = CreateEventHandler::new(store.clone(), store.clone());

        let err = handler
            .handle(command("mgr@example.com", Some(foreign.id)))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ClubNotFound);
    }
}
