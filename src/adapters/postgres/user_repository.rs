//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, Email, Timestamp};
use crate::domain::user::{Role, User};
use crate::ports::{ListOptions, UpdateResult, UserRepository};

use super::{db_error, parse_column, parse_email, update_result};

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    email: String,
    name: Option<String>,
    photo_url: Option<String>,
    role: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            email: parse_email("email", &row.email)?,
            name: row.name,
            photo_url: row.photo_url,
            role: parse_column("role", &row.role)?,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create_if_absent(&self, user: &User) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (email, name, photo_url, role, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(user.email.as_str())
        .bind(&user.name)
        .bind(&user.photo_url)
        .bind(user.role.as_str())
        .bind(user.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("insert user"))?;

        Ok(result.rows_affected() == 1)
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            "SELECT email, name, photo_url, role, created_at FROM users WHERE email = $1",
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("fetch user"))?;

        row.map(User::try_from).transpose()
    }

    async fn list(&self, options: ListOptions) -> Result<Vec<User>, DomainError> {
        let sql = format!(
            "SELECT email, name, photo_url, role, created_at FROM users \
             ORDER BY created_at {} LIMIT $1",
            options.sql_direction()
        );
        let rows: Vec<UserRow> = sqlx::query_as(&sql)
            .bind(options.limit_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list users"))?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn set_role(&self, email: &Email, role: Role) -> Result<UpdateResult, DomainError> {
        let counts: (i64, i64) = sqlx::query_as(
            r#"
            WITH target AS (SELECT email FROM users WHERE email = $1),
                 changed AS (
                     UPDATE users SET role = $2
                     WHERE email = $1 AND role <> $2
                     RETURNING email
                 )
            SELECT (SELECT COUNT(*) FROM target), (SELECT COUNT(*) FROM changed)
            "#,
        )
        .bind(email.as_str())
        .bind(role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("update user role"))?;

        Ok(update_result(counts))
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("count users"))?;
        Ok(count.max(0) as u64)
    }
}
