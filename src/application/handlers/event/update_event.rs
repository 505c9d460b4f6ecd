//! UpdateEventHandler - Command handler for editing an owned event.

use std::sync::Arc;

use crate::domain::event::EventPatch;
use crate::domain::foundation::{DomainError, Email, EventId, OwnedByUser};
use crate::ports::{EventRepository, UpdateResult};

#[derive(Debug, Clone)]
pub struct UpdateEventCommand {
    pub event_id: EventId,
    pub manager_email: Email,
    pub patch: EventPatch,
}

pub struct UpdateEventHandler {
    events: Arc<dyn EventRepository>,
}

impl UpdateEventHandler {
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    pub async fn handle(&self, cmd: UpdateEventCommand) -> Result<UpdateResult, DomainError> {
        let Some(mut event) = self.events.find_by_id(&cmd.event_id).await? else {
            return Ok(UpdateResult::not_found());
        };
        event.check_ownership(&cmd.manager_email)?;

        event.apply(&cmd.patch)?;
        self.events.update(&event).await
    }
}
