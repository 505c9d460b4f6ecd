use async_trait::async_trait;

use crate::domain::event::Event;
use crate::domain::foundation::{DomainError, EventId};
use crate::ports::{DeleteResult, EventFilter, EventRepository, ListOptions, UpdateResult};

use super::{ordered, InMemoryStore};

#[async_trait]
impl EventRepository for InMemoryStore {
    async fn create(&self, event: &Event) -> Result<(), DomainError> {
        self.check_available()?;
        self.events.write().await.push(event.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, DomainError> {
        self.check_available()?;
        Ok(self.events.read().await.iter().find(|e| &e.id == id).cloned())
    }

    async fn list(
        &self,
        filter: &EventFilter,
        options: ListOptions,
    ) -> Result<Vec<Event>, DomainError> {
        self.check_available()?;
        let events: Vec<Event> = self
            .events
            .read()
            .await
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();
        Ok(ordered(events, options, |e| e.event_date))
    }

    async fn update(&self, event: &Event) -> Result<UpdateResult, DomainError> {
        self.check_available()?;
        let mut events = self.events.write().await;
        match events.iter_mut().find(|e| e.id == event.id) {
            None => Ok(UpdateResult::not_found()),
            Some(stored) => {
                let club_id = stored.club_id;
                let manager_email = stored.manager_email.clone();
                let created_at = stored.created_at;
                *stored = Event {
                    club_id,
                    manager_email,
                    created_at,
                    ..event.clone()
                };
                Ok(UpdateResult::modified())
            }
        }
    }

    async fn delete(&self, id: &EventId) -> Result<DeleteResult, DomainError> {
        self.check_available()?;
        let mut events = self.events.write().await;
        let before = events.len();
        events.retain(|e| &e.id != id);
        Ok(DeleteResult {
            deleted: (before - events.len()) as u64,
        })
    }

    async fn count(&self, filter: &EventFilter) -> Result<u64, DomainError> {
        self.check_available()?;
        let events = self.events.read().await;
        Ok(events.iter().filter(|e| filter.matches(e)).count() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::club::{Club, NewClub};
    use crate::domain::event::EventDetails;
    use crate::domain::foundation::{Email, Timestamp};

    fn event(days: i64) -> Event {
        let club = Club::create(
            Email::new("m@example.com").unwrap(),
            NewClub {
                club_name: "c".to_string(),
                ..Default::default()
            },
        )
        .unwrap();
        Event::schedule(
            &club,
            EventDetails {
                title: format!("in {} days", days),
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

    #[tokio::test]
    async fn list_sorts_on_event_date() {
        let store = InMemoryStore::new();
        for days in [5, 1, 3] {
            store.create(&event(days)).await.unwrap();
        }
        let soonest_first = store
            .list(&EventFilter::all(), ListOptions::oldest_first())
            .await
            .unwrap();
        let titles: Vec<_> = soonest_first.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["in 1 days", "in 3 days", "in 5 days"]);
    }

    #[tokio::test]
    async fn delete_reports_count() {
        let store = InMemoryStore::new();
        let event = event(1);
        store.create(&event).await.unwrap();

        assert_eq!(store.delete(&event.id).await.unwrap().deleted, 1);
        assert_eq!(store.delete(&event.id).await.unwrap().deleted, 0);
        assert_eq!(store.count(&EventFilter::all()).await.unwrap(), 0);
    }
}
