//! Listing options and write summaries shared by all repositories.

use serde::Serialize;

/// Order on a collection's primary timestamp (`createdAt`, `eventDate`,
/// `registeredAt`, `joinedAt`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    NewestFirst,
    OldestFirst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListOptions {
    pub sort: SortOrder,
    pub limit: Option<u32>,
}

impl ListOptions {
    pub fn newest_first() -> Self {
        Self {
            sort: SortOrder::NewestFirst,
            limit: None,
        }
    }

    pub fn oldest_first() -> Self {
        Self {
            sort: SortOrder::OldestFirst,
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// `LIMIT` bind value; `NULL` means unbounded.
    pub fn limit_i64(&self) -> Option<i64> {
        self.limit.map(i64::from)
    }

    pub fn sql_direction(&self) -> &'static str {
        match self.sort {
            SortOrder::NewestFirst => "DESC",
            SortOrder::OldestFirst => "ASC",
        }
    }
}

/// Outcome of an update by id. An unknown id is `matched: 0`, not an error;
/// writing an unchanged value is `modified: 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct UpdateResult {
    pub matched: u64,
    pub modified: u64,
}

impl UpdateResult {
    pub fn not_found() -> Self {
        Self::default()
    }

    pub fn unchanged() -> Self {
        Self {
            matched: 1,
            modified: 0,
        }
    }

    pub fn modified() -> Self {
        Self {
            matched: 1,
            modified: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DeleteResult {
    pub deleted: u64,
}
