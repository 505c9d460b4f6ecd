//! DeleteEventHandler - Command handler for removing an owned event.
//!
//! Registrations pointing at the event are left in place and render with
//! placeholder details afterwards.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Email, EventId, OwnedByUser};
use crate::ports::{DeleteResult, EventRepository};

#[derive(Debug, Clone)]
pub struct DeleteEventCommand {
    pub event_id: EventId,
    pub manager_email: Email,
}

pub struct DeleteEventHandler {
    events: Arc<dyn EventRepository>,
}

impl DeleteEventHandler {
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    pub async fn handle(&self, cmd: DeleteEventCommand) -> Result<DeleteResult, DomainError> {
        let Some(event) = self.events.find_by_id(&cmd.event_id).await? else {
            return Ok(DeleteResult::default());
        };
        event.check_ownership(&cmd.manager_email)?;

        let result = self.events.delete(&cmd.event_id).await?;
        tracing::info!(event_id = %cmd.event_id, deleted = result.deleted, "Event deleted");
        Ok(result)
    }
}
