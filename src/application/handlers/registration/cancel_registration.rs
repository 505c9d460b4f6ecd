//! CancelRegistrationHandler - Command handler for a member withdrawing
//! from an event.

use std::sync::Arc;

use crate::domain::foundation::{
    DomainError, Email, OwnedByUser, RegistrationId, StateMachine, Timestamp,
};
use crate::domain::registration::RegistrationStatus;
use crate::ports::{RegistrationRepository, UpdateResult};

#[derive(Debug, Clone)]
pub struct CancelRegistrationCommand {
    pub registration_id: RegistrationId,
    pub user_email: Email,
}

pub struct CancelRegistrationHandler {
    registrations: Arc<dyn RegistrationRepository>,
}

impl CancelRegistrationHandler {
    pub fn new(registrations: Arc<dyn RegistrationRepository>) -> Self {
        Self { registrations }
    }

    /// Cancelling twice reports `modified: 0` the second time; an unknown
    /// id matches nothing.
    pub async fn handle(&self, cmd: CancelRegistrationCommand) -> Result<UpdateResult, DomainError> {
        let Some(registration) = self.registrations.find_by_id(&cmd.registration_id).await? else {
            return Ok(UpdateResult::not_found());
        };
        registration.check_ownership(&cmd.user_email)?;

        let target = registration.status.transition_to(RegistrationStatus::Cancelled)?;
        let result = self
            .registrations
            .set_status(&registration.id, target, Timestamp::now())
            .await?;

        if result.modified > 0 {
            tracing::info!(registration_id = %registration.id, "Registration cancelled");
        }
        Ok(result)
    }
}
