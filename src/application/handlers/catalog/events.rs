//! Event browsing.

use std::sync::Arc;

use crate::domain::event::Event;
use crate::domain::foundation::{ClubId, DomainError, ErrorCode, EventId, Timestamp};
use crate::ports::{EventFilter, EventRepository, ListOptions};

#[derive(Debug, Clone, Default)]
pub struct ListEventsQuery {
    pub club_id: Option<ClubId>,
    /// Only events dated now or later.
    pub upcoming: bool,
}

pub struct ListEventsHandler {
    events: Arc<dyn EventRepository>,
}

impl ListEventsHandler {
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    /// Soonest first.
    pub async fn handle(&self, query: ListEventsQuery) -> Result<Vec<Event>, DomainError> {
        let mut filter = match query.club_id {
            Some(club_id) => EventFilter::in_clubs(vec![club_id]),
            None => EventFilter::all(),
        };
        if query.upcoming {
            filter = filter.upcoming_from(Timestamp::now());
        }
        self.events.list(&filter, ListOptions::oldest_first()).await
    }
}

pub struct GetEventHandler {
    events: Arc<dyn EventRepository>,
}

impl GetEventHandler {
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    pub async fn handle(&self, id: &EventId) -> Result<Event, DomainError> {
        self.events
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::EventNotFound, "Event not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{event_details, seed_club, seed_event, store};
    use crate::domain::club::ClubStatus;

    #[tokio::test]
    async fn upcoming_events_are_soonest_first_and_skip_past_ones() {
        let store = store();
        let club = seed_club(&store, "m@example.com", "Chess", 0.0, ClubStatus::Approved).await;
        seed_event(&store, &club, event_details("Later", 10, 0.0)).await;
        seed_event(&store, &club, event_details("Past", -3, 0.0)).await;
        seed_event(&store, &club, event_details("Sooner", 2, 0.0)).await;

        let handler = ListEventsHandler::new(store);
        let upcoming = handler
            .handle(ListEventsQuery {
                club_id: None,
                upcoming: true,
            })
            .await
            .unwrap();
        let titles: Vec<_> = upcoming.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Sooner", "Later"]);

        let all = handler.handle(ListEventsQuery::default()).await.unwrap();
        assert_eq!(all[0].title, "Past");
    }

    #[tokio::test]
    async fn club_filter_excludes_other_clubs() {
        let store = store();
        let chess = seed_club(&store, "m@example.com", "Chess", 0.0, ClubStatus::Approved).await;
        let go = seed_club(&store, "m@example.com", "Go", 0.0, ClubStatus::Approved).await;
        seed_event(&store, &chess, event_details("Blitz", 1, 0.0)).await;
        seed_event(&store, &go, event_details("Joseki", 1, 0.0)).await;

        let events = ListEventsHandler::new(store)
            .handle(ListEventsQuery {
                club_id: Some(go.id),
                upcoming: false,
            })
            .await
            .unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Joseki");
    }

    #[tokio::test]
    async fn missing_event_is_not_found() {
        let err = GetEventHandler::new(store()).handle(&EventId::new()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::EventNotFound);
    }
}
