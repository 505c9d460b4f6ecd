use serde::Deserialize;

use crate::application::handlers::ListEventsQuery;
use crate::domain::event::{EventDetails, EventPatch};
use crate::domain::foundation::{ClubId, Timestamp};

use super::super::error::ApiError;
use super::super::extract::{parse_id, required};

/// Body of `POST /manager/my-events` and `PUT /manager/my-events/:id`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    #[serde(default)]
    pub club_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub event_date: Option<Timestamp>,
    #[serde(default)]
    pub is_paid: Option<bool>,
    #[serde(default)]
    pub event_fee: Option<f64>,
    #[serde(default)]
    pub max_attendees: Option<u32>,
}

impl EventRequest {
    /// Target club, when the manager named one.
    pub fn club_id(&self) -> Result<Option<ClubId>, ApiError> {
        match self.club_id.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => parse_id(raw).map(Some),
            None => Ok(None),
        }
    }

    pub fn into_details(self) -> Result<EventDetails, ApiError> {
        let title = required(&self.title, "title")?.to_string();
        let event_date = self
            .event_date
            .ok_or_else(|| ApiError::invalid_argument("eventDate is required"))?;
        let event_fee = self.event_fee.unwrap_or(0.0);
        Ok(EventDetails {
            title,
            description: self.description,
            location: self.location,
            event_date,
            is_paid: self.is_paid.unwrap_or(event_fee > 0.0),
            event_fee,
            max_attendees: self.max_attendees,
        })
    }

    pub fn into_patch(self) -> EventPatch {
        EventPatch {
            title: self.title,
            description: self.description,
            location: self.location,
            event_date: self.event_date,
            is_paid: self.is_paid,
            event_fee: self.event_fee,
            max_attendees: self.max_attendees,
        }
    }
}

/// `GET /events?clubId=&upcoming=true`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventListQuery {
    pub club_id: Option<String>,
    pub upcoming: Option<String>,
}

impl EventListQuery {
    pub fn into_query(self) -> Result<ListEventsQuery, ApiError> {
        let club_id = match self.club_id.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => Some(parse_id(raw)?),
            None => None,
        };
        let upcoming = self
            .upcoming
            .as_deref()
            .map_or(false, |v| v.trim().eq_ignore_ascii_case("true"));
        Ok(ListEventsQuery { club_id, upcoming })
    }
}
