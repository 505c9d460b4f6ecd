//! A member's own memberships, registrations and payments.

use serde::Serialize;

use crate::domain::club::Club;
use crate::domain::event::Event;
use crate::domain::foundation::{ClubId, EventId, Timestamp};
use crate::domain::membership::Membership;
use crate::domain::payment::Payment;
use crate::domain::registration::Registration;

use super::{ReferenceIndex, NOT_AVAILABLE, UNKNOWN_CLUB};

/// Membership plus the details of the club it points to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipView {
    #[serde(flatten)]
    pub membership: Membership,
    pub club_name: String,
    pub category: Option<String>,
    pub location: Option<String>,
    pub banner_image: Option<String>,
    pub membership_fee: Option<f64>,
}

impl MembershipView {
    pub fn decorate(membership: Membership, clubs: &ReferenceIndex<ClubId, Club>) -> Self {
        let club = clubs.get(&membership.club_id);
        Self {
            club_name: club
                .map(|c| c.club_name.clone())
                .unwrap_or_else(|| UNKNOWN_CLUB.to_string()),
            category: club.and_then(|c| c.category.clone()),
            location: club.and_then(|c| c.location.clone()),
            banner_image: club.and_then(|c| c.banner_image.clone()),
            membership_fee: club.map(|c| c.membership_fee),
            membership,
        }
    }
}

/// Registration plus its event's headline fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationView {
    #[serde(flatten)]
    pub registration: Registration,
    #[serde(rename = "title")]
    pub event_title: String,
    /// `None` when the event no longer exists.
    pub event_date: Option<Timestamp>,
    #[serde(rename = "location")]
    pub event_location: String,
    pub club_name: String,
}

impl RegistrationView {
    pub fn decorate(
        registration: Registration,
        events: &ReferenceIndex<EventId, Event>,
        clubs: &ReferenceIndex<ClubId, Club>,
    ) -> Self {
        let event = events.get(&registration.event_id);
        Self {
            event_title: events.label(&registration.event_id, |e| e.title.as_str(), NOT_AVAILABLE),
            event_date: event.map(|e| e.event_date),
            event_location: event
                .and_then(|e| e.location.clone())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            club_name: clubs.label(&registration.club_id, |c| c.club_name.as_str(), UNKNOWN_CLUB),
            registration,
        }
    }
}

/// Upcoming event annotated with its club's name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingEvent {
    #[serde(flatten)]
    pub event: Event,
    pub club_name: String,
}

impl UpcomingEvent {
    pub fn decorate(event: Event, clubs: &ReferenceIndex<ClubId, Club>) -> Self {
        Self {
            club_name: clubs.label(&event.club_id, |c| c.club_name.as_str(), UNKNOWN_CLUB),
            event,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberOverview {
    pub active_memberships: Vec<MembershipView>,
    pub total_events_registered: u64,
    /// Soonest first.
    pub upcoming_events: Vec<UpcomingEvent>,
    pub memberships: Vec<MembershipView>,
    /// Newest first.
    pub payments: Vec<Payment>,
}
