use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Email, EventId, RegistrationId, Timestamp};
use crate::domain::registration::{Registration, RegistrationStatus};
use crate::ports::{ListOptions, RegistrationFilter, RegistrationRepository, UpdateResult};

use super::{ordered, InMemoryStore};

#[async_trait]
impl RegistrationRepository for InMemoryStore {
    async fn create(&self, registration: &Registration) -> Result<(), DomainError> {
        self.check_available()?;
        self.registrations.write().await.push(registration.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &RegistrationId) -> Result<Option<Registration>, DomainError> {
        self.check_available()?;
        let registrations = self.registrations.read().await;
        Ok(registrations.iter().find(|r| &r.id == id).cloned())
    }

    async fn find_active(
        &self,
        event_id: &EventId,
        user_email: &Email,
    ) -> Result<Option<Registration>, DomainError> {
        self.check_available()?;
        let registrations = self.registrations.read().await;
        Ok(registrations
            .iter()
            .find(|r| &r.event_id == event_id && &r.user_email == user_email && r.is_active())
            .cloned())
    }

    async fn list(
        &self,
        filter: &RegistrationFilter,
        options: ListOptions,
    ) -> Result<Vec<Registration>, DomainError> {
        self.check_available()?;
        let registrations: Vec<Registration> = self
            .registrations
            .read()
            .await
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect();
        Ok(ordered(registrations, options, |r| r.registered_at))
    }

    async fn set_status(
        &self,
        id: &RegistrationId,
        status: RegistrationStatus,
        at: Timestamp,
    ) -> Result<UpdateResult, DomainError> {
        self.check_available()?;
        let mut registrations = self.registrations.write().await;
        match registrations.iter_mut().find(|r| &r.id == id) {
            None => Ok(UpdateResult::not_found()),
            Some(r) if r.status == status => Ok(UpdateResult::unchanged()),
            Some(r) => {
                r.status = status;
                if status == RegistrationStatus::Cancelled {
                    r.cancelled_at = Some(at);
                }
                Ok(UpdateResult::modified())
            }
        }
    }

    async fn count(&self, filter: &RegistrationFilter) -> Result<u64, DomainError> {
        self.check_available()?;
        let registrations = self.registrations.read().await;
        Ok(registrations.iter().filter(|r| filter.matches(r)).count() as u64)
    }
}
