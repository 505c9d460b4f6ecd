//! Event repository port.

use async_trait::async_trait;

use crate::domain::event::Event;
use crate::domain::foundation::{ClubId, DomainError, EventId, Timestamp};

use super::{DeleteResult, ListOptions, UpdateResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilter {
    pub club_ids: Option<Vec<ClubId>>,
    pub ids: Option<Vec<EventId>>,
    /// Only events with `eventDate >= from`.
    pub from: Option<Timestamp>,
}

impl EventFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn in_clubs(club_ids: Vec<ClubId>) -> Self {
        Self {
            club_ids: Some(club_ids),
            ..Self::default()
        }
    }

    pub fn with_ids(ids: Vec<EventId>) -> Self {
        Self {
            ids: Some(ids),
            ..Self::default()
        }
    }

    pub fn upcoming_from(mut self, now: Timestamp) -> Self {
        self.from = Some(now);
        self
    }

    pub fn matches(&self, event: &Event) -> bool {
        self.club_ids
            .as_ref()
            .map_or(true, |ids| ids.contains(&event.club_id))
            && self.ids.as_ref().map_or(true, |ids| ids.contains(&event.id))
            && self.from.as_ref().map_or(true, |from| event.is_upcoming(from))
    }
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: &Event) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, DomainError>;

    /// Sorted on `eventDate`.
    async fn list(&self, filter: &EventFilter, options: ListOptions)
        -> Result<Vec<Event>, DomainError>;

    async fn update(&self, event: &Event) -> Result<UpdateResult, DomainError>;

    async fn delete(&self, id: &EventId) -> Result<DeleteResult, DomainError>;

    async fn count(&self, filter: &EventFilter) -> Result<u64, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::club::{Club, NewClub};
    use crate::domain::event::EventDetails;
    use crate::domain::foundation::Email;

    fn event_in_days(days: i64) -> Event {
        let club = Club::create(
            Email::new("m@example.com").unwrap(),
            NewClub {
                club_name: "Cyclists".to_string(),
                ..Default::default()
            },
        )
        .unwrap();
        Event::schedule(
            &club,
            EventDetails {
                title: "Ride".to_string(),
                description: None,
                location: None,
                event_date: Timestamp::now().add_days(days),
                is_paid: false,
                event_fee: 0.0,
                max_attendees: None,
            },
        )
        .unwrap()
    }

    #[test]
    fn upcoming_filter_excludes_past_events() {
        let filter = EventFilter::all().upcoming_from(Timestamp::now());
        assert!(filter.matches(&event_in_days(2)));
        assert!(!filter.matches(&event_in_days(-2)));
    }

    #[test]
    fn club_filter() {
        let event = event_in_days(1);
        assert!(EventFilter::in_clubs(vec![event.club_id]).matches(&event));
        assert!(!EventFilter::in_clubs(vec![ClubId::new()]).matches(&event));
        assert!(EventFilter::with_ids(vec![event.id]).matches(&event));
    }
}
