//! Event record.

use serde::{Deserialize, Serialize};

use crate::domain::club::Club;
use crate::domain::foundation::{
    ClubId, Email, EventId, OwnedByUser, Timestamp, ValidationError,
};

/// An event hosted by a club. Carries a copy of the club's manager email so
/// ownership checks need no extra lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub club_id: ClubId,
    pub manager_email: Email,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub event_date: Timestamp,
    pub is_paid: bool,
    /// Zero for free events.
    pub event_fee: f64,
    pub max_attendees: Option<u32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Manager-supplied event fields.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDetails {
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub event_date: Timestamp,
    pub is_paid: bool,
    pub event_fee: f64,
    pub max_attendees: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub event_date: Option<Timestamp>,
    pub is_paid: Option<bool>,
    pub event_fee: Option<f64>,
    pub max_attendees: Option<u32>,
}

impl Event {
    /// Schedules an event under `club`, inheriting its id and manager.
    pub fn schedule(club: &Club, details: EventDetails) -> Result<Self, ValidationError> {
        let title = details.title.trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        let event_fee = normalize_fee(details.is_paid, details.event_fee)?;

        let now = Timestamp::now();
        Ok(Self {
            id: EventId::new(),
            club_id: club.id,
            manager_email: club.manager_email.clone(),
            title,
            description: details.description,
            location: details.location,
            event_date: details.event_date,
            is_paid: details.is_paid,
            event_fee,
            max_attendees: details.max_attendees,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn is_upcoming(&self, now: &Timestamp) -> bool {
        !self.event_date.is_before(now)
    }

    /// True once `registered` reaches the attendee cap.
    pub fn is_full(&self, registered: u64) -> bool {
        self.max_attendees
            .map(|max| registered >= u64::from(max))
            .unwrap_or(false)
    }

    /// Applies a patch, re-checking the paid/fee pair as a whole.
    pub fn apply(&mut self, patch: &EventPatch) -> Result<(), ValidationError> {
        if let Some(title) = &patch.title {
            if title.trim().is_empty() {
                return Err(ValidationError::empty_field("title"));
            }
        }
        let is_paid = patch.is_paid.unwrap_or(self.is_paid);
        let event_fee = normalize_fee(is_paid, patch.event_fee.unwrap_or(self.event_fee))?;

        if let Some(title) = &patch.title {
            self.title = title.trim().to_string();
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(location) = &patch.location {
            self.location = Some(location.clone());
        }
        if let Some(date) = patch.event_date {
            self.event_date = date;
        }
        if let Some(max) = patch.max_attendees {
            self.max_attendees = Some(max);
        }
        self.is_paid = is_paid;
        self.event_fee = event_fee;
        self.updated_at = Timestamp::now();
        Ok(())
    }
}

impl OwnedByUser for Event {
    fn owner_email(&self) -> &Email {
        &self.manager_email
    }
}

/// Paid events need a positive fee; free events always carry zero.
fn normalize_fee(is_paid: bool, fee: f64) -> Result<f64, ValidationError> {
    if !is_paid {
        return Ok(0.0);
    }
    if !fee.is_finite() {
        return Err(ValidationError::invalid_format("eventFee", "not a number"));
    }
    if fee <= 0.0 {
        return Err(ValidationError::invalid_format(
            "eventFee",
            "paid events need a positive fee",
        ));
    }
    Ok(fee)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::club::NewClub;

    fn club() -> Club {
        Club::create(
            Email::new("manager@example.com").unwrap(),
            NewClub {
                club_name: "Hikers".to_string(),
                ..Default::default()
            },
        )
        .unwrap()
    }

    fn details() -> EventDetails {
        EventDetails {
            title: "Summit day".to_string(),
            description: None,
            location: Some("Trailhead".to_string()),
            event_date: Timestamp::now().add_days(7),
            is_paid: false,
            event_fee: 15.0,
            max_attendees: Some(2),
        }
    }

    #[test]
    fn schedule_copies_club_reference_and_zeroes_free_fee() {
        let club = club();
        let event = Event::schedule(&club, details()).unwrap();
        assert_eq!(event.club_id, club.id);
        assert_eq!(event.manager_email, club.manager_email);
        assert_eq!(event.event_fee, 0.0);
        assert!(event.is_upcoming(&Timestamp::now()));
    }

    #[test]
    fn paid_event_requires_positive_fee() {
        let zero_fee = EventDetails {
            is_paid: true,
            event_fee: 0.0,
            ..details()
        };
        assert!(Event::schedule(&club(), zero_fee).is_err());

        let paid = EventDetails {
            is_paid: true,
            ..details()
        };
        assert_eq!(Event::schedule(&club(), paid).unwrap().event_fee, 15.0);
    }

    #[test]
    fn capacity() {
        let event = Event::schedule(&club(), details()).unwrap();
        assert!(!event.is_full(1));
        assert!(event.is_full(2));

        let unlimited = Event::schedule(
            &club(),
            EventDetails {
                max_attendees: None,
                ..details()
            },
        )
        .unwrap();
        assert!(!unlimited.is_full(10_000));
    }

    #[test]
    fn apply_patch_rechecks_fee() {
        let mut event = Event::schedule(&club(), details()).unwrap();
        let make_paid_without_fee = EventPatch {
            is_paid: Some(true),
            event_fee: Some(0.0),
            ..Default::default()
        };
        assert!(event.apply(&make_paid_without_fee).is_err());
        assert!(!event.is_paid);

        let make_paid = EventPatch {
            is_paid: Some(true),
            event_fee: Some(12.5),
            title: Some("Sunrise summit".to_string()),
            ..Default::default()
        };
        event.apply(&make_paid).unwrap();
        assert!(event.is_paid);
        assert_eq!(event.event_fee, 12.5);
        assert_eq!(event.title, "Sunrise summit");
    }

    #[test]
    fn past_events_are_not_upcoming() {
        let past = Event::schedule(
            &club(),
            EventDetails {
                event_date: Timestamp::now().minus_days(1),
                ..details()
            },
        )
        .unwrap();
        assert!(!past.is_upcoming(&Timestamp::now()));
    }
}
