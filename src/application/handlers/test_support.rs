//! Fixtures shared by handler tests.

use std::sync::Arc;

use crate::adapters::memory::InMemoryStore;
use crate::domain::club::{Club, ClubStatus, NewClub};
use crate::domain::event::{Event, EventDetails};
use crate::domain::foundation::{Email, Timestamp};
use crate::domain::user::{Role, User};
use crate::ports::{ClubRepository, EventRepository, UserRepository};

pub fn email(raw: &str) -> Email {
    Email::new(raw).unwrap()
}

pub fn store() -> Arc<InMemoryStore> {
    Arc::new(InMemoryStore::new())
}

pub async fn seed_user(store: &InMemoryStore, raw: &str, role: Role) -> User {
    let mut user = User::register(email(raw), None, None);
    user.role = role;
    store.create_if_absent(&user).await.unwrap();
    user
}

pub async fn seed_club(
    store: &InMemoryStore,
    manager: &str,
    name: &str,
    fee: f64,
    status: ClubStatus,
) -> Club {
    let mut club = Club::create(
        email(manager),
        NewClub {
            club_name: name.to_string(),
            membership_fee: fee,
            ..Default::default()
        },
    )
    .unwrap();
    club.status = status;
    ClubRepository::create(store, &club).await.unwrap();
    club
}

pub fn event_details(title: &str, days_from_now: i64, fee: f64) -> EventDetails {
    EventDetails {
        title: title.to_string(),
        description: None,
        location: Some("Hall A".to_string()),
        event_date: Timestamp::now().add_days(days_from_now),
        is_paid: fee > 0.0,
        event_fee: fee,
        max_attendees: None,
    }
}

pub async fn seed_event(store: &InMemoryStore, club: &Club, details: EventDetails) -> Event {
    let event = Event::schedule(club, details).unwrap();
    EventRepository::create(store, &event).await.unwrap();
    event
}
