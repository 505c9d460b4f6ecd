use async_trait::async_trait;

use crate::domain::club::{Club, ClubStatus};
use crate::domain::foundation::{ClubId, DomainError, Timestamp};
use crate::ports::{ClubFilter, ClubRepository, ListOptions, UpdateResult};

use super::{ordered, InMemoryStore};

#[async_trait]
impl ClubRepository for InMemoryStore {
    async fn create(&self, club: &Club) -> Result<(), DomainError> {
        self.check_available()?;
        self.clubs.write().await.push(club.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ClubId) -> Result<Option<Club>, DomainError> {
        self.check_available()?;
        Ok(self.clubs.read().await.iter().find(|c| &c.id == id).cloned())
    }

    async fn list(
        &self,
        filter: &ClubFilter,
        options: ListOptions,
    ) -> Result<Vec<Club>, DomainError> {
        self.check_available()?;
        let clubs: Vec<Club> = self
            .clubs
            .read()
            .await
            .iter()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect();
        Ok(ordered(clubs, options, |c| c.created_at))
    }

    async fn update(&self, club: &Club) -> Result<UpdateResult, DomainError> {
        self.check_available()?;
        let mut clubs = self.clubs.write().await;
        match clubs.iter_mut().find(|c| c.id == club.id) {
            None => Ok(UpdateResult::not_found()),
            Some(stored) => {
                // status and ownership are not editable through update
                let status = stored.status;
                let manager_email = stored.manager_email.clone();
                let created_at = stored.created_at;
                *stored = Club {
                    status,
                    manager_email,
                    created_at,
                    ..club.clone()
                };
                Ok(UpdateResult::modified())
            }
        }
    }

    async fn set_status(
        &self,
        id: &ClubId,
        status: ClubStatus,
    ) -> Result<UpdateResult, DomainError> {
        self.check_available()?;
        let mut clubs = self.clubs.write().await;
        match clubs.iter_mut().find(|c| &c.id == id) {
            None => Ok(UpdateResult::not_found()),
            Some(club) if club.status == status => Ok(UpdateResult::unchanged()),
            Some(club) => {
                club.status = status;
                club.updated_at = Timestamp::now();
                Ok(UpdateResult::modified())
            }
        }
    }

    async fn count_by_status(&self) -> Result<Vec<(ClubStatus, u64)>, DomainError> {
        self.check_available()?;
        let clubs = self.clubs.read().await;
        Ok(ClubStatus::ALL
            .iter()
            .map(|s| (*s, clubs.iter().filter(|c| c.status == *s).count() as u64))
            .filter(|(_, n)| *n > 0)
            .collect())
    }
}
