//! PostgreSQL implementation of PaymentRepository.
//!
//! `gateway_session_id` is unique, so recording the same checkout twice
//! returns the first row instead of inserting a duplicate.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{ClubId, DomainError, EventId, PaymentId, Timestamp};
use crate::domain::payment::Payment;
use crate::ports::{ListOptions, PaymentFilter, PaymentRepository};

use super::{db_error, parse_column, parse_email, uuid_list};

const PAYMENT_COLUMNS: &str = "id, user_email, club_id, club_name, event_id, amount, \
                               payment_type, status, gateway_session_id, created_at";

const PAYMENT_FILTER: &str = r#"
    ($1::text IS NULL OR user_email = $1)
    AND ($2::uuid[] IS NULL OR club_id = ANY($2))
"#;

pub struct PostgresPaymentRepository {
    pool: PgPool,
}

impl PostgresPaymentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PaymentRow {
    id: Uuid,
    user_email: String,
    club_id: Uuid,
    club_name: String,
    event_id: Option<Uuid>,
    amount: f64,
    payment_type: String,
    status: String,
    gateway_session_id: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<PaymentRow> for Payment {
    type Error = DomainError;

    fn try_from(row: PaymentRow) -> Result<Self, Self::Error> {
        Ok(Payment {
            id: PaymentId::from_uuid(row.id),
            user_email: parse_email("user_email", &row.user_email)?,
            club_id: ClubId::from_uuid(row.club_id),
            club_name: row.club_name,
            event_id: row.event_id.map(EventId::from_uuid),
            amount: row.amount,
            payment_type: parse_column("payment_type", &row.payment_type)?,
            status: parse_column("status", &row.status)?,
            gateway_session_id: row.gateway_session_id,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

#[async_trait]
impl PaymentRepository for PostgresPaymentRepository {
    async fn create_for_session(&self, payment: &Payment) -> Result<Payment, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO payments (
                id, user_email, club_id, club_name, event_id, amount,
                payment_type, status, gateway_session_id, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (gateway_session_id) DO NOTHING
            "#,
        )
        .bind(payment.id.as_uuid())
        .bind(payment.user_email.as_str())
        .bind(payment.club_id.as_uuid())
        .bind(&payment.club_name)
        .bind(payment.event_id.map(|id| *id.as_uuid()))
        .bind(payment.amount)
        .bind(payment.payment_type.as_str())
        .bind(payment.status.as_str())
        .bind(&payment.gateway_session_id)
        .bind(payment.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("insert payment"))?;

        self.find_by_session(&payment.gateway_session_id)
            .await?
            .ok_or_else(|| DomainError::database("Payment missing after insert"))
    }

    async fn find_by_session(&self, session_id: &str) -> Result<Option<Payment>, DomainError> {
        let sql = format!(
            "SELECT {} FROM payments WHERE gateway_session_id = $1",
            PAYMENT_COLUMNS
        );
        let row: Option<PaymentRow> = sqlx::query_as(&sql)
            .bind(session_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("fetch payment"))?;

        row.map(Payment::try_from).transpose()
    }

    async fn list(
        &self,
        filter: &PaymentFilter,
        options: ListOptions,
    ) -> Result<Vec<Payment>, DomainError> {
        let sql = format!(
            "SELECT {} FROM payments WHERE {} ORDER BY created_at {} LIMIT $3",
            PAYMENT_COLUMNS,
            PAYMENT_FILTER,
            options.sql_direction()
        );
        let rows: Vec<PaymentRow> = sqlx::query_as(&sql)
            .bind(filter.user_email.as_ref().map(|e| e.as_str()))
            .bind(uuid_list(filter.club_ids.as_ref(), |id| *id.as_uuid()))
            .bind(options.limit_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list payments"))?;

        rows.into_iter().map(Payment::try_from).collect()
    }

    async fn total_amount(&self, filter: &PaymentFilter) -> Result<f64, DomainError> {
        let sql = format!(
            "SELECT COALESCE(SUM(amount), 0)::float8 FROM payments WHERE {}",
            PAYMENT_FILTER
        );
        let (total,): (f64,) = sqlx::query_as(&sql)
            .bind(filter.user_email.as_ref().map(|e| e.as_str()))
            .bind(uuid_list(filter.club_ids.as_ref(), |id| *id.as_uuid()))
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("sum payments"))?;

        Ok(total)
    }
}
