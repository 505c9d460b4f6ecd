//! PostgreSQL implementation of RegistrationRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{
    ClubId, DomainError, Email, EventId, PaymentId, RegistrationId, Timestamp,
};
use crate::domain::registration::{Registration, RegistrationStatus};
use crate::ports::{ListOptions, RegistrationFilter, RegistrationRepository, UpdateResult};

use super::{db_error, parse_column, parse_email, update_result, uuid_list};

const REGISTRATION_COLUMNS: &str =
    "id, event_id, user_email, club_id, status, payment_id, registered_at, cancelled_at";

const REGISTRATION_FILTER: &str = r#"
    ($1::text IS NULL OR user_email = $1)
    AND ($2::uuid IS NULL OR event_id = $2)
    AND ($3::uuid[] IS NULL OR club_id = ANY($3))
    AND ($4::text IS NULL OR status = $4)
"#;

pub struct PostgresRegistrationRepository {
    pool: PgPool,
}

impl PostgresRegistrationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct RegistrationRow {
    id: Uuid,
    event_id: Uuid,
    user_email: String,
    club_id: Uuid,
    status: String,
    payment_id: Option<Uuid>,
    registered_at: DateTime<Utc>,
    cancelled_at: Option<DateTime<Utc>>,
}

impl TryFrom<RegistrationRow> for Registration {
    type Error = DomainError;

    fn try_from(row: RegistrationRow) -> Result<Self, Self::Error> {
        Ok(Registration {
            id: RegistrationId::from_uuid(row.id),
            event_id: EventId::from_uuid(row.event_id),
            user_email: parse_email("user_email", &row.user_email)?,
            club_id: ClubId::from_uuid(row.club_id),
            status: parse_column("status", &row.status)?,
            payment_id: row.payment_id.map(PaymentId::from_uuid),
            registered_at: Timestamp::from_datetime(row.registered_at),
            cancelled_at: row.cancelled_at.map(Timestamp::from_datetime),
        })
    }
}

#[async_trait]
impl RegistrationRepository for PostgresRegistrationRepository {
    async fn create(&self, registration: &Registration) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO registrations (
                id, event_id, user_email, club_id, status, payment_id, registered_at, cancelled_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(registration.id.as_uuid())
        .bind(registration.event_id.as_uuid())
        .bind(registration.user_email.as_str())
        .bind(registration.club_id.as_uuid())
        .bind(registration.status.as_str())
        .bind(registration.payment_id.map(|id| *id.as_uuid()))
        .bind(registration.registered_at.as_datetime())
        .bind(registration.cancelled_at.map(|t| *t.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(db_error("insert registration"))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &RegistrationId) -> Result<Option<Registration>, DomainError> {
        let sql = format!(
            "SELECT {} FROM registrations WHERE id = $1",
            REGISTRATION_COLUMNS
        );
        let row: Option<RegistrationRow> = sqlx::query_as(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("fetch registration"))?;

        row.map(Registration::try_from).transpose()
    }

    async fn find_active(
        &self,
        event_id: &EventId,
        user_email: &Email,
    ) -> Result<Option<Registration>, DomainError> {
        let sql = format!(
            "SELECT {} FROM registrations \
             WHERE event_id = $1 AND user_email = $2 AND status = $3 LIMIT 1",
            REGISTRATION_COLUMNS
        );
        let row: Option<RegistrationRow> = sqlx::query_as(&sql)
            .bind(event_id.as_uuid())
            .bind(user_email.as_str())
            .bind(RegistrationStatus::Registered.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("fetch registration"))?;

        row.map(Registration::try_from).transpose()
    }

    async fn list(
        &self,
        filter: &RegistrationFilter,
        options: ListOptions,
    ) -> Result<Vec<Registration>, DomainError> {
        let sql = format!(
            "SELECT {} FROM registrations WHERE {} ORDER BY registered_at {} LIMIT $5",
            REGISTRATION_COLUMNS,
            REGISTRATION_FILTER,
            options.sql_direction()
        );
        let rows: Vec<RegistrationRow> = sqlx::query_as(&sql)
            .bind(filter.user_email.as_ref().map(|e| e.as_str()))
            .bind(filter.event_id.map(|id| *id.as_uuid()))
            .bind(uuid_list(filter.club_ids.as_ref(), |id| *id.as_uuid()))
            .bind(filter.status.map(|s| s.as_str()))
            .bind(options.limit_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list registrations"))?;

        rows.into_iter().map(Registration::try_from).collect()
    }

    async fn set_status(
        &self,
        id: &RegistrationId,
        status: RegistrationStatus,
        at: Timestamp,
    ) -> Result<UpdateResult, DomainError> {
        let counts: (i64, i64) = sqlx::query_as(
            r#"
            WITH target AS (SELECT id FROM registrations WHERE id = $1),
                 changed AS (
                     UPDATE registrations SET
                         status = $2,
                         cancelled_at = CASE WHEN $2 = 'cancelled' THEN $3 ELSE cancelled_at END
                     WHERE id = $1 AND status <> $2
                     RETURNING id
                 )
            SELECT (SELECT COUNT(*) FROM target), (SELECT COUNT(*) FROM changed)
            "#,
        )
        .bind(id.as_uuid())
        .bind(status.as_str())
        .bind(at.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("update registration status"))?;

        Ok(update_result(counts))
    }

    async fn count(&self, filter: &RegistrationFilter) -> Result<u64, DomainError> {
        let sql = format!(
            "SELECT COUNT(*) FROM registrations WHERE {}",
            REGISTRATION_FILTER
        );
        let (count,): (i64,) = sqlx::query_as(&sql)
            .bind(filter.user_email.as_ref().map(|e| e.as_str()))
            .bind(filter.event_id.map(|id| *id.as_uuid()))
            .bind(uuid_list(filter.club_ids.as_ref(), |id| *id.as_uuid()))
            .bind(filter.status.map(|s| s.as_str()))
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("count registrations"))?;

        Ok(count.max(0) as u64)
    }
}
