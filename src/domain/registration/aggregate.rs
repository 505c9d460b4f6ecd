//! Registration record.

use serde::{Deserialize, Serialize};

use crate::domain::event::Event;
use crate::domain::foundation::{
    ClubId, Email, EventId, OwnedByUser, PaymentId, RegistrationId, Timestamp,
};

use super::RegistrationStatus;

/// A member's place at an event.
///
/// At most one `registered` row should exist per (event, member). This is
/// checked before insert, not enforced by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: RegistrationId,
    pub event_id: EventId,
    pub user_email: Email,
    pub club_id: ClubId,
    pub status: RegistrationStatus,
    pub payment_id: Option<PaymentId>,
    pub registered_at: Timestamp,
    pub cancelled_at: Option<Timestamp>,
}

impl Registration {
    pub fn register(event: &Event, user_email: Email, payment_id: Option<PaymentId>) -> Self {
        Self {
            id: RegistrationId::new(),
            event_id: event.id,
            user_email,
            club_id: event.club_id,
            status: RegistrationStatus::Registered,
            payment_id,
            registered_at: Timestamp::now(),
            cancelled_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == RegistrationStatus::Registered
    }
}

impl OwnedByUser for Registration {
    fn owner_email(&self) -> &Email {
        &self.user_email
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::club::{Club, NewClub};
    use crate::domain::event::EventDetails;

    #[test]
    fn register_copies_event_and_club_ids() {
        let club = Club::create(
            Email::new("m@example.com").unwrap(),
            NewClub {
                club_name: "Runners".to_string(),
                ..Default::default()
            },
        )
        .unwrap();
        let event = Event::schedule(
            &club,
            EventDetails {
                title: "5k".to_string(),
                description: None,
                location: None,
                event_date: Timestamp::now(),
                is_paid: false,
                event_fee: 0.0,
                max_attendees: None,
            },
        )
        .unwrap();

        let member = Email::new("r@example.com").unwrap();
        let registration = Registration::register(&event, member.clone(), None);

        assert_eq!(registration.event_id, event.id);
        assert_eq!(registration.club_id, club.id);
        assert!(registration.is_active());
        assert!(registration.is_owned_by(&member));
        assert!(registration.cancelled_at.is_none());
    }
}
