//! Club browsing.

use std::sync::Arc;

use crate::domain::club::{Club, ClubStatus};
use crate::domain::foundation::{ClubId, DomainError, Email, ErrorCode};
use crate::ports::{ClubFilter, ClubRepository, ListOptions};

/// How many clubs the landing page features.
pub const FEATURED_CLUB_LIMIT: u32 = 6;

pub struct ListClubsHandler {
    clubs: Arc<dyn ClubRepository>,
}

impl ListClubsHandler {
    pub fn new(clubs: Arc<dyn ClubRepository>) -> Self {
        Self { clubs }
    }

    /// Newest first. An empty filter lists every club regardless of status.
    pub async fn handle(&self, filter: ClubFilter) -> Result<Vec<Club>, DomainError> {
        self.clubs.list(&filter, ListOptions::newest_first()).await
    }
}

pub struct ListFeaturedClubsHandler {
    clubs: Arc<dyn ClubRepository>,
}

impl ListFeaturedClubsHandler {
    pub fn new(clubs: Arc<dyn ClubRepository>) -> Self {
        Self { clubs }
    }

    pub async fn handle(&self) -> Result<Vec<Club>, DomainError> {
        self.clubs
            .list(
                &ClubFilter::all().with_status(ClubStatus::Approved),
                ListOptions::newest_first().with_limit(FEATURED_CLUB_LIMIT),
            )
            .await
    }
}

pub struct ListManagedClubsHandler {
    clubs: Arc<dyn ClubRepository>,
}

impl ListManagedClubsHandler {
    pub fn new(clubs: Arc<dyn ClubRepository>) -> Self {
        Self { clubs }
    }

    pub async fn handle(&self, manager: &Email) -> Result<Vec<Club>, DomainError> {
        self.clubs
            .list(&ClubFilter::managed_by(manager), ListOptions::newest_first())
            .await
    }
}

pub struct GetClubHandler {
    clubs: Arc<dyn ClubRepository>,
}

impl GetClubHandler {
    pub fn new(clubs: Arc<dyn ClubRepository>) -> Self {
        Self { clubs }
    }

    pub async fn handle(&self, id: &ClubId) -> Result<Club, DomainError> {
        self.clubs
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ClubNotFound, "Club not found"))
    }
}
