use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DirectoryError;
use crate::models::{NewUser, UserCredentials, UserRecord};

/// Lookup of users by id and by login email.
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, DirectoryError>;

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, DirectoryError>;

    async fn create_user(&self, new_user: NewUser) -> Result<UserRecord, DirectoryError>;
}
