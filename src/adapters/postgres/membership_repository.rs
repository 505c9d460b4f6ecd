//! PostgreSQL implementation of MembershipRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{ClubId, DomainError, Email, MembershipId, PaymentId, Timestamp};
use crate::domain::membership::{Membership, MembershipStatus};
use crate::ports::{ListOptions, MembershipFilter, MembershipRepository, UpdateResult};

use super::{db_error, parse_column, parse_email, update_result, uuid_list};

const MEMBERSHIP_COLUMNS: &str = "id, user_email, club_id, status, payment_id, joined_at, expires_at";

const MEMBERSHIP_FILTER: &str = r#"
    ($1::text IS NULL OR user_email = $1)
    AND ($2::uuid[] IS NULL OR club_id = ANY($2))
    AND ($3::text IS NULL OR status = $3)
"#;

/// PostgreSQL implementation of the MembershipRepository port.
pub struct PostgresMembershipRepository {
    pool: PgPool,
}

impl PostgresMembershipRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct MembershipRow {
    id: Uuid,
    user_email: String,
    club_id: Uuid,
    status: String,
    payment_id: Option<Uuid>,
    joined_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
}

impl TryFrom<MembershipRow> for Membership {
    type Error = DomainError;

    fn try_from(row: MembershipRow) -> Result<Self, Self::Error> {
        Ok(Membership {
            id: MembershipId::from_uuid(row.id),
            user_email: parse_email("user_email", &row.user_email)?,
            club_id: ClubId::from_uuid(row.club_id),
            status: parse_column("status", &row.status)?,
            payment_id: row.payment_id.map(PaymentId::from_uuid),
            joined_at: Timestamp::from_datetime(row.joined_at),
            expires_at: row.expires_at.map(Timestamp::from_datetime),
        })
    }
}

#[async_trait]
impl MembershipRepository for PostgresMembershipRepository {
    async fn create(&self, membership: &Membership) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO memberships (
                id, user_email, club_id, status, payment_id, joined_at, expires_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(membership.id.as_uuid())
        .bind(membership.user_email.as_str())
        .bind(membership.club_id.as_uuid())
        .bind(membership.status.as_str())
        .bind(membership.payment_id.map(|id| *id.as_uuid()))
        .bind(membership.joined_at.as_datetime())
        .bind(membership.expires_at.map(|t| *t.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(db_error("insert membership"))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &MembershipId) -> Result<Option<Membership>, DomainError> {
        let sql = format!("SELECT {} FROM memberships WHERE id = $1", MEMBERSHIP_COLUMNS);
        let row: Option<MembershipRow> = sqlx::query_as(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("fetch membership"))?;

        row.map(Membership::try_from).transpose()
    }

    async fn find_active(
        &self,
        user_email: &Email,
        club_id: &ClubId,
    ) -> Result<Option<Membership>, DomainError> {
        let sql = format!(
            "SELECT {} FROM memberships \
             WHERE user_email = $1 AND club_id = $2 AND status = $3 LIMIT 1",
            MEMBERSHIP_COLUMNS
        );
        let row: Option<MembershipRow> = sqlx::query_as(&sql)
            .bind(user_email.as_str())
            .bind(club_id.as_uuid())
            .bind(MembershipStatus::Active.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("fetch membership"))?;

        row.map(Membership::try_from).transpose()
    }

    async fn list(
        &self,
        filter: &MembershipFilter,
        options: ListOptions,
    ) -> Result<Vec<Membership>, DomainError> {
        let sql = format!(
            "SELECT {} FROM memberships WHERE {} ORDER BY joined_at {} LIMIT $4",
            MEMBERSHIP_COLUMNS,
            MEMBERSHIP_FILTER,
            options.sql_direction()
        );
        let rows: Vec<MembershipRow> = sqlx::query_as(&sql)
            .bind(filter.user_email.as_ref().map(|e| e.as_str()))
            .bind(uuid_list(filter.club_ids.as_ref(), |id| *id.as_uuid()))
            .bind(filter.status.map(|s| s.as_str()))
            .bind(options.limit_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list memberships"))?;

        rows.into_iter().map(Membership::try_from).collect()
    }

    async fn set_status(
        &self,
        id: &MembershipId,
        status: MembershipStatus,
    ) -> Result<UpdateResult, DomainError> {
        let counts: (i64, i64) = sqlx::query_as(
            r#"
            WITH target AS (SELECT id FROM memberships WHERE id = $1),
                 changed AS (
                     UPDATE memberships SET
                         status = $2,
                         expires_at = CASE WHEN $2 = 'expired' THEN now() ELSE expires_at END
                     WHERE id = $1 AND status <> $2
                     RETURNING id
                 )
            SELECT (SELECT COUNT(*) FROM target), (SELECT COUNT(*) FROM changed)
            "#,
        )
        .bind(id.as_uuid())
        .bind(status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("update membership status"))?;

        Ok(update_result(counts))
    }

    async fn count(&self, filter: &MembershipFilter) -> Result<u64, DomainError> {
        let sql = format!("SELECT COUNT(*) FROM memberships WHERE {}", MEMBERSHIP_FILTER);
        let (count,): (i64,) = sqlx::query_as(&sql)
            .bind(filter.user_email.as_ref().map(|e| e.as_str()))
            .bind(uuid_list(filter.club_ids.as_ref(), |id| *id.as_uuid()))
            .bind(filter.status.map(|s| s.as_str()))
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("count memberships"))?;

        Ok(count.max(0) as u64)
    }
}
