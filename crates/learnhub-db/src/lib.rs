//! # LearnHub DB
//!
//! Database pool and the user directory for the LearnHub API.
//!
//! The authentication flow only needs two questions answered about users:
//! "who has this login email?" and "who is user `id`?". [`UserDirectory`]
//! captures exactly that, with a PostgreSQL implementation for the server
//! and an in-memory one for tests and local tooling.
//!
//! # Example
//!
//! ```ignore
//! use learnhub_db::{PgUserDirectory, UserDirectory, init_db_pool};
//!
//! let pool = init_db_pool(&database_url).await?;
//! let directory = PgUserDirectory::new(pool);
//! let user = directory.find_by_id(user_id).await?;
//! ```

pub mod directory;
pub mod error;
pub mod memory;
pub mod models;
pub mod postgres;

pub use directory::UserDirectory;
pub use error::DirectoryError;
pub use memory::InMemoryUserDirectory;
pub use models::{NewUser, UserCredentials, UserRecord};
pub use postgres::PgUserDirectory;

// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// Connects to PostgreSQL and applies pending migrations.
///
/// Called once during startup; the returned pool is cheaply cloneable.
pub async fn init_db_pool(database_url: &str) -> Result<PgPool, DirectoryError> {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}
