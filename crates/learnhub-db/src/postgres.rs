use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::directory::UserDirectory;
use crate::error::DirectoryError;
use crate::models::{NewUser, UserCredentials, UserRecord, normalize_email};

#[derive(Debug, Clone)]
pub struct PgUserDirectory {
    pool: PgPool,
}

impl PgUserDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    name: String,
    role: String,
    created_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct UserWithPasswordRow {
    id: Uuid,
    email: String,
    name: String,
    role: String,
    created_at: DateTime<Utc>,
    password_hash: String,
}

impl TryFrom<UserRow> for UserRecord {
    type Error = DirectoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(UserRecord {
            id: row.id,
            email: row.email,
            name: row.name,
            role: row.role.parse()?,
            created_at: row.created_at,
        })
    }
}

impl TryFrom<UserWithPasswordRow> for UserCredentials {
    type Error = DirectoryError;

    fn try_from(row: UserWithPasswordRow) -> Result<Self, Self::Error> {
        Ok(UserCredentials {
            user: UserRecord {
                id: row.id,
                email: row.email,
                name: row.name,
                role: row.role.parse()?,
                created_at: row.created_at,
            },
            password_hash: row.password_hash,
        })
    }
}

#[async_trait]
impl UserDirectory for PgUserDirectory {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, DirectoryError> {
        sqlx::query_as::<_, UserRow>(
            "SELECT id, email, name, role, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .map(UserRecord::try_from)
        .transpose()
    }

    #[instrument(skip(self))]
    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, DirectoryError> {
        sqlx::query_as::<_, UserWithPasswordRow>(
            "SELECT id, email, name, role, created_at, password_hash
             FROM users WHERE LOWER(email) = $1",
        )
        .bind(normalize_email(email))
        .fetch_optional(&self.pool)
        .await?
        .map(UserCredentials::try_from)
        .transpose()
    }

    #[instrument(skip(self, new_user), fields(email = %new_user.email, role = %new_user.role))]
    async fn create_user(&self, new_user: NewUser) -> Result<UserRecord, DirectoryError> {
        let email = normalize_email(&new_user.email);

        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (id, email, name, password_hash, role)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, email, name, role, created_at",
        )
        .bind(Uuid::new_v4())
        .bind(&email)
        .bind(&new_user.name)
        .bind(&new_user.password_hash)
        .bind(new_user.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                DirectoryError::DuplicateEmail(email.clone())
            }
            other => DirectoryError::Database(other),
        })?;

        row.try_into()
    }
}
