//! Registration repository port.

use async_trait::async_trait;

use crate::domain::foundation::{ClubId, DomainError, Email, EventId, RegistrationId, Timestamp};
use crate::domain::registration::{Registration, RegistrationStatus};

use super::{ListOptions, UpdateResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationFilter {
    pub user_email: Option<Email>,
    pub event_id: Option<EventId>,
    pub club_ids: Option<Vec<ClubId>>,
    pub status: Option<RegistrationStatus>,
}

impl RegistrationFilter {
    pub fn for_user(email: &Email) -> Self {
        Self {
            user_email: Some(email.clone()),
            ..Self::default()
        }
    }

    pub fn for_event(event_id: EventId) -> Self {
        Self {
            event_id: Some(event_id),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: RegistrationStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn matches(&self, registration: &Registration) -> bool {
        self.user_email
            .as_ref()
            .map_or(true, |e| &registration.user_email == e)
            && self.event_id.map_or(true, |id| registration.event_id == id)
            && self
                .club_ids
                .as_ref()
                .map_or(true, |ids| ids.contains(&registration.club_id))
            && self.status.map_or(true, |s| registration.status == s)
    }
}

#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    async fn create(&self, registration: &Registration) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &RegistrationId) -> Result<Option<Registration>, DomainError>;

    /// The member's `registered` row for `event_id`, if any.
    async fn find_active(
        &self,
        event_id: &EventId,
        user_email: &Email,
    ) -> Result<Option<Registration>, DomainError>;

    /// Sorted on `registeredAt`.
    async fn list(
        &self,
        filter: &RegistrationFilter,
        options: ListOptions,
    ) -> Result<Vec<Registration>, DomainError>;

    /// Cancelling stamps `cancelledAt` with `at`. `modified: 0` when the
    /// status is unchanged.
    async fn set_status(
        &self,
        id: &RegistrationId,
        status: RegistrationStatus,
        at: Timestamp,
    ) -> Result<UpdateResult, DomainError>;

    async fn count(&self, filter: &RegistrationFilter) -> Result<u64, DomainError>;
}
