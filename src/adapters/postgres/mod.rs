//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! One repository per collection, all sharing a single `PgPool`:
//! - `PostgresUserRepository`
//! - `PostgresClubRepository`
//! - `PostgresEventRepository`
//! - `PostgresRegistrationRepository`
//! - `PostgresMembershipRepository`
//! - `PostgresPaymentRepository`

mod club_repository;
mod event_repository;
mod membership_repository;
mod payment_repository;
mod registration_repository;
mod user_repository;

pub use club_repository::PostgresClubRepository;
pub use event_repository::PostgresEventRepository;
pub use membership_repository::PostgresMembershipRepository;
pub use payment_repository::PostgresPaymentRepository;
pub use registration_repository::PostgresRegistrationRepository;
pub use user_repository::PostgresUserRepository;

use std::str::FromStr;

use uuid::Uuid;

use crate::domain::foundation::{DomainError, Email, ValidationError};
use crate::ports::UpdateResult;

/// Maps a sqlx failure to a database error tagged with what was attempted.
fn db_error(action: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| DomainError::database(format!("Failed to {}: {}", action, e))
}

/// Parses a stored text column back into its domain enum.
fn parse_column<T>(column: &str, raw: &str) -> Result<T, DomainError>
where
    T: FromStr<Err = ValidationError>,
{
    raw.parse()
        .map_err(|_| DomainError::database(format!("Invalid {} value: {}", column, raw)))
}

fn parse_email(column: &str, raw: &str) -> Result<Email, DomainError> {
    Email::new(raw).map_err(|e| DomainError::database(format!("Invalid {}: {}", column, e)))
}

/// Result of the `matched`/`modified` CTE used by status flips.
fn update_result((matched, modified): (i64, i64)) -> UpdateResult {
    UpdateResult {
        matched: matched.max(0) as u64,
        modified: modified.max(0) as u64,
    }
}

fn uuid_list<T>(ids: Option<&Vec<T>>, as_uuid: impl Fn(&T) -> Uuid) -> Option<Vec<Uuid>> {
    ids.map(|ids| ids.iter().map(as_uuid).collect())
}
