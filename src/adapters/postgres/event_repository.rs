//! PostgreSQL implementation of EventRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::event::Event;
use crate::domain::foundation::{ClubId, DomainError, EventId, Timestamp};
use crate::ports::{DeleteResult, EventFilter, EventRepository, ListOptions, UpdateResult};

use super::{db_error, parse_email, uuid_list};

const EVENT_COLUMNS: &str = "id, club_id, manager_email, title, description, location, \
                             event_date, is_paid, event_fee, max_attendees, created_at, updated_at";

const EVENT_FILTER: &str = r#"
    ($1::uuid[] IS NULL OR club_id = ANY($1))
    AND ($2::uuid[] IS NULL OR id = ANY($2))
    AND ($3::timestamptz IS NULL OR event_date >= $3)
"#;

pub struct PostgresEventRepository {
    pool: PgPool,
}

impl PostgresEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct EventRow {
    id: Uuid,
    club_id: Uuid,
    manager_email: String,
    title: String,
    description: Option<String>,
    location: Option<String>,
    event_date: DateTime<Utc>,
    is_paid: bool,
    event_fee: f64,
    max_attendees: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<EventRow> for Event {
    type Error = DomainError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        let max_attendees = row
            .max_attendees
            .map(u32::try_from)
            .transpose()
            .map_err(|e| DomainError::database(format!("Invalid max_attendees: {}", e)))?;

        Ok(Event {
            id: EventId::from_uuid(row.id),
            club_id: ClubId::from_uuid(row.club_id),
            manager_email: parse_email("manager_email", &row.manager_email)?,
            title: row.title,
            description: row.description,
            location: row.location,
            event_date: Timestamp::from_datetime(row.event_date),
            is_paid: row.is_paid,
            event_fee: row.event_fee,
            max_attendees,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

#[async_trait]
impl EventRepository for PostgresEventRepository {
    async fn create(&self, event: &Event) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO events (
                id, club_id, manager_email, title, description, location,
                event_date, is_paid, event_fee, max_attendees, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(event.id.as_uuid())
        .bind(event.club_id.as_uuid())
        .bind(event.manager_email.as_str())
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.location)
        .bind(event.event_date.as_datetime())
        .bind(event.is_paid)
        .bind(event.event_fee)
        .bind(event.max_attendees.map(i64::from))
        .bind(event.created_at.as_datetime())
        .bind(event.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("insert event"))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, DomainError> {
        let sql = format!("SELECT {} FROM events WHERE id = $1", EVENT_COLUMNS);
        let row: Option<EventRow> = sqlx::query_as(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("fetch event"))?;

        row.map(Event::try_from).transpose()
    }

    async fn list(
        &self,
        filter: &EventFilter,
        options: ListOptions,
    ) -> Result<Vec<Event>, DomainError> {
        let sql = format!(
            "SELECT {} FROM events WHERE {} ORDER BY event_date {} LIMIT $4",
            EVENT_COLUMNS,
            EVENT_FILTER,
            options.sql_direction()
        );
        let rows: Vec<EventRow> = sqlx::query_as(&sql)
            .bind(uuid_list(filter.club_ids.as_ref(), |id| *id.as_uuid()))
            .bind(uuid_list(filter.ids.as_ref(), |id| *id.as_uuid()))
            .bind(filter.from.map(|t| *t.as_datetime()))
            .bind(options.limit_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list events"))?;

        rows.into_iter().map(Event::try_from).collect()
    }

    async fn update(&self, event: &Event) -> Result<UpdateResult, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE events SET
                title = $2,
                description = $3,
                location = $4,
                event_date = $5,
                is_paid = $6,
                event_fee = $7,
                max_attendees = $8,
                updated_at = $9
            WHERE id = $1
            "#,
        )
        .bind(event.id.as_uuid())
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.location)
        .bind(event.event_date.as_datetime())
        .bind(event.is_paid)
        .bind(event.event_fee)
        .bind(event.max_attendees.map(i64::from))
        .bind(event.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("update event"))?;

        Ok(match result.rows_affected() {
            0 => UpdateResult::not_found(),
            _ => UpdateResult::modified(),
        })
    }

    async fn delete(&self, id: &EventId) -> Result<DeleteResult, DomainError> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(db_error("delete event"))?;

        Ok(DeleteResult {
            deleted: result.rows_affected(),
        })
    }

    async fn count(&self, filter: &EventFilter) -> Result<u64, DomainError> {
        let sql = format!("SELECT COUNT(*) FROM events WHERE {}", EVENT_FILTER);
        let (count,): (i64,) = sqlx::query_as(&sql)
            .bind(uuid_list(filter.club_ids.as_ref(), |id| *id.as_uuid()))
            .bind(uuid_list(filter.ids.as_ref(), |id| *id.as_uuid()))
            .bind(filter.from.map(|t| *t.as_datetime()))
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("count events"))?;

        Ok(count.max(0) as u64)
    }
}
