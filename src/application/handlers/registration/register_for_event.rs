//! RegisterForEventHandler - Command handler for a member taking a place at
//! a free event.
//!
//! Paid events go through checkout instead; the registration is written
//! when the payment is confirmed.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Email, ErrorCode, EventId};
use crate::domain::registration::{Registration, RegistrationStatus};
use crate::ports::{EventRepository, RegistrationFilter, RegistrationRepository};

#[derive(Debug, Clone)]
pub struct RegisterForEventCommand {
    pub event_id: EventId,
    pub user_email: Email,
}

pub struct RegisterForEventHandler {
    events: Arc<dyn EventRepository>,
    registrations: Arc<dyn RegistrationRepository>,
}

impl RegisterForEventHandler {
    pub fn new(
        events: Arc<dyn EventRepository>,
        registrations: Arc<dyn RegistrationRepository>,
    ) -> Self {
        Self {
            events,
            registrations,
        }
    }

    pub async fn handle(&self, cmd: RegisterForEventCommand) -> Result<Registration, DomainError> {
        let event = self
            .events
            .find_by_id(&cmd.event_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::EventNotFound, "Event not found"))?;

        if event.is_paid {
            return Err(DomainError::new(
                ErrorCode::PaymentRequired,
                "This event requires payment",
            ));
        }

        // Check-then-insert: two concurrent requests can both pass this.
        if self
            .registrations
            .find_active(&event.id, &cmd.user_email)
            .await?
            .is_some()
        {
            return Err(DomainError::new(ErrorCode::AlreadyRegistered, "Already registered"));
        }

        if event.max_attendees.is_some() {
            let taken = self
                .registrations
                .count(&RegistrationFilter::for_event(event.id).with_status(RegistrationStatus::Registered))
                .await?;
            if event.is_full(taken) {
                return Err(DomainError::new(ErrorCode::EventFull, "Event is full"));
            }
        }

        let registration = Registration::register(&event, cmd.user_email, None);
        self.registrations.create(&registration).await?;

        tracing::info!(
            registration_id = %registration.id,
            event_id = %event.id,
            user = %registration.user_email,
            "Registered for event"
        );
        Ok(registration)
    }
}
