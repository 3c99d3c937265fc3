//! In-memory [`UserDirectory`] used by tests and local tooling.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::directory::UserDirectory;
use crate::error::DirectoryError;
use crate::models::{NewUser, UserCredentials, UserRecord, normalize_email};

#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<Uuid, UserCredentials>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, DirectoryError> {
        Ok(self.users.read().await.get(&id).map(|c| c.user.clone()))
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, DirectoryError> {
        let email = normalize_email(email);
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|c| c.user.email == email)
            .cloned())
    }

    async fn create_user(&self, new_user: NewUser) -> Result<UserRecord, DirectoryError> {
        let email = normalize_email(&new_user.email);
        let mut users = self.users.write().await;

        if users.values().any(|c| c.user.email == email) {
            return Err(DirectoryError::DuplicateEmail(email));
        }

        let user = UserRecord {
            id: Uuid::new_v4(),
            email,
            name: new_user.name,
            role: new_user.role,
            created_at: Utc::now(),
        };
        users.insert(
            user.id,
            UserCredentials {
                user: user.clone(),
                password_hash: new_user.password_hash,
            },
        );

        Ok(user)
    }
}
