//! PostgreSQL implementation of ClubRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::club::{Club, ClubStatus};
use crate::domain::foundation::{ClubId, DomainError, Timestamp};
use crate::ports::{ClubFilter, ClubRepository, ListOptions, UpdateResult};

use super::{db_error, parse_column, parse_email, update_result, uuid_list};

const CLUB_COLUMNS: &str = "id, manager_email, club_name, description, category, location, \
                            banner_image, membership_fee, status, created_at, updated_at";

pub struct PostgresClubRepository {
    pool: PgPool,
}

impl PostgresClubRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ClubRow {
    id: Uuid,
    manager_email: String,
    club_name: String,
    description: Option<String>,
    category: Option<String>,
    location: Option<String>,
    banner_image: Option<String>,
    membership_fee: f64,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ClubRow> for Club {
    type Error = DomainError;

    fn try_from(row: ClubRow) -> Result<Self, Self::Error> {
        Ok(Club {
            id: ClubId::from_uuid(row.id),
            manager_email: parse_email("manager_email", &row.manager_email)?,
            club_name: row.club_name,
            description: row.description,
            category: row.category,
            location: row.location,
            banner_image: row.banner_image,
            membership_fee: row.membership_fee,
            status: parse_column("status", &row.status)?,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

#[async_trait]
impl ClubRepository for PostgresClubRepository {
    async fn create(&self, club: &Club) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO clubs (
                id, manager_email, club_name, description, category, location,
                banner_image, membership_fee, status, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(club.id.as_uuid())
        .bind(club.manager_email.as_str())
        .bind(&club.club_name)
        .bind(&club.description)
        .bind(&club.category)
        .bind(&club.location)
        .bind(&club.banner_image)
        .bind(club.membership_fee)
        .bind(club.status.as_str())
        .bind(club.created_at.as_datetime())
        .bind(club.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("insert club"))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &ClubId) -> Result<Option<Club>, DomainError> {
        let sql = format!("SELECT {} FROM clubs WHERE id = $1", CLUB_COLUMNS);
        let row: Option<ClubRow> = sqlx::query_as(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("fetch club"))?;

        row.map(Club::try_from).transpose()
    }

    async fn list(
        &self,
        filter: &ClubFilter,
        options: ListOptions,
    ) -> Result<Vec<Club>, DomainError> {
        let sql = format!(
            r#"
            SELECT {} FROM clubs
            WHERE ($1::text IS NULL OR status = $1)
              AND ($2::text IS NULL OR manager_email = $2)
              AND ($3::uuid[] IS NULL OR id = ANY($3))
              AND ($4::text IS NULL OR lower(category) = lower($4))
              AND ($5::text IS NULL OR strpos(lower(club_name), lower($5)) > 0)
            ORDER BY created_at {}
            LIMIT $6
            "#,
            CLUB_COLUMNS,
            options.sql_direction()
        );
        let rows: Vec<ClubRow> = sqlx::query_as(&sql)
            .bind(filter.status.map(|s| s.as_str()))
            .bind(filter.manager_email.as_ref().map(|e| e.as_str()))
            .bind(uuid_list(filter.ids.as_ref(), |id| *id.as_uuid()))
            .bind(filter.category.as_deref())
            .bind(filter.search.as_deref())
            .bind(options.limit_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list clubs"))?;

        rows.into_iter().map(Club::try_from).collect()
    }

    async fn update(&self, club: &Club) -> Result<UpdateResult, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE clubs SET
                club_name = $2,
                description = $3,
                category = $4,
                location = $5,
                banner_image = $6,
                membership_fee = $7,
                updated_at = $8
            WHERE id = $1
            "#,
        )
        .bind(club.id.as_uuid())
        .bind(&club.club_name)
        .bind(&club.description)
        .bind(&club.category)
        .bind(&club.location)
        .bind(&club.banner_image)
        .bind(club.membership_fee)
        .bind(club.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("update club"))?;

        Ok(match result.rows_affected() {
            0 => UpdateResult::not_found(),
            _ => UpdateResult::modified(),
        })
    }

    async fn set_status(
        &self,
        id: &ClubId,
        status: ClubStatus,
    ) -> Result<UpdateResult, DomainError> {
        let counts: (i64, i64) = sqlx::query_as(
            r#"
            WITH target AS (SELECT id FROM clubs WHERE id = $1),
                 changed AS (
                     UPDATE clubs SET status = $2, updated_at = now()
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
        .map_err(db_error("update club status"))?;

        Ok(update_result(counts))
    }

    async fn count_by_status(&self) -> Result<Vec<(ClubStatus, u64)>, DomainError> {
        let rows: Vec<(String, i64)> =
            sqlx::query_as("SELECT status, COUNT(*) FROM clubs GROUP BY status")
                .fetch_all(&self.pool)
                .await
                .map_err(db_error("count clubs"))?;

        let mut counts = rows
            .into_iter()
            .map(|(status, n)| Ok((parse_column("status", &status)?, n.max(0) as u64)))
            .collect::<Result<Vec<(ClubStatus, u64)>, DomainError>>()?;
        counts.sort_by_key(|(status, _)| ClubStatus::ALL.iter().position(|s| s == status));
        Ok(counts)
    }
}
