use learnhub_auth::ParseRoleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("stored user has an unknown role: {0}")]
    InvalidRole(#[from] ParseRoleError),

    #[error("a user with email {0} already exists")]
    DuplicateEmail(String),
}
