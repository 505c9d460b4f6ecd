//! Club repository port.

use async_trait::async_trait;

use crate::domain::club::{Club, ClubStatus};
use crate::domain::foundation::{ClubId, DomainError, Email};

use super::{ListOptions, UpdateResult};

/// Conjunctive club filter. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClubFilter {
    pub status: Option<ClubStatus>,
    pub manager_email: Option<Email>,
    pub ids: Option<Vec<ClubId>>,
    /// Exact, case-insensitive.
    pub category: Option<String>,
    /// Case-insensitive substring of the club name.
    pub search: Option<String>,
}

impl ClubFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn managed_by(email: &Email) -> Self {
        Self {
            manager_email: Some(email.clone()),
            ..Self::default()
        }
    }

    pub fn with_ids(ids: Vec<ClubId>) -> Self {
        Self {
            ids: Some(ids),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: ClubStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn matches(&self, club: &Club) -> bool {
        self.status.map_or(true, |s| club.status == s)
            && self
                .manager_email
                .as_ref()
                .map_or(true, |e| &club.manager_email == e)
            && self.ids.as_ref().map_or(true, |ids| ids.contains(&club.id))
            && self.category.as_ref().map_or(true, |c| {
                club.category
                    .as_deref()
                    .map_or(false, |cat| cat.eq_ignore_ascii_case(c))
            })
            && self.search.as_ref().map_or(true, |q| {
                club.club_name.to_lowercase().contains(&q.to_lowercase())
            })
    }
}

#[async_trait]
pub trait ClubRepository: Send + Sync {
    async fn create(&self, club: &Club) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &ClubId) -> Result<Option<Club>, DomainError>;

    /// Sorted on `createdAt`.
    async fn list(&self, filter: &ClubFilter, options: ListOptions)
        -> Result<Vec<Club>, DomainError>;

    /// Replaces the editable fields of the stored club with `club`'s.
    async fn update(&self, club: &Club) -> Result<UpdateResult, DomainError>;

    /// `modified: 0` when the club already has `status`.
    async fn set_status(&self, id: &ClubId, status: ClubStatus)
        -> Result<UpdateResult, DomainError>;

    /// One entry per status that has at least one club.
    async fn count_by_status(&self) -> Result<Vec<(ClubStatus, u64)>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::club::NewClub;

    fn club(name: &str, category: Option<&str>) -> Club {
        Club::create(
            Email::new("m@example.com").unwrap(),
            NewClub {
                club_name: name.to_string(),
                category: category.map(str::to_string),
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(ClubFilter::all().matches(&club("Chess", None)));
    }

    #[test]
    fn search_and_category_are_case_insensitive() {
        let chess = club("Downtown Chess Club", Some("Games"));
        let filter = ClubFilter {
            category: Some("games".to_string()),
            search: Some("CHESS".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&chess));
        assert!(!filter.matches(&club("Chess", None)));
    }

    #[test]
    fn status_manager_and_ids_combine() {
        let chess = club("Chess", None);
        assert!(!ClubFilter::all()
            .with_status(ClubStatus::Approved)
            .matches(&chess));
        assert!(ClubFilter::managed_by(&chess.manager_email).matches(&chess));
        assert!(!ClubFilter::managed_by(&Email::new("x@example.com").unwrap()).matches(&chess));
        assert!(ClubFilter::with_ids(vec![chess.id]).matches(&chess));
        assert!(!ClubFilter::with_ids(vec![]).matches(&chess));
    }

    #[test]
    fn club_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ClubRepository) {}
    }
}
