//! ListEventRegistrationsHandler - Query handler for an event's attendee list.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Email, ErrorCode, EventId, OwnedByUser};
use crate::domain::registration::Registration;
use crate::ports::{EventRepository, ListOptions, RegistrationFilter, RegistrationRepository};

#[derive(Debug, Clone)]
pub struct ListEventRegistrationsQuery {
    pub event_id: EventId,
    pub manager_email: Email,
}

pub struct ListEventRegistrationsHandler {
    events: Arc<dyn EventRepository>,
    registrations: Arc<dyn RegistrationRepository>,
}

impl ListEventRegistrationsHandler {
    pub fn new(
        events: Arc<dyn EventRepository>,
        registrations: Arc<dyn RegistrationRepository>,
    ) -> Self {
        Self {
            events,
            registrations,
        }
    }

    /// Every registration for the event, cancelled ones included, newest first.
    pub async fn handle(&self, query: ListEventRegistrationsQuery) -> Result<Vec<Registration>, DomainError> {
        let event = self
            .events
            .find_by_id(&query.event_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::EventNotFound, "Event not found"))?;
        event.check_ownership(&query.manager_email)?;

        self.registrations
            .list(&RegistrationFilter::for_event(event.id), ListOptions::newest_first())
            .await
    }
}
