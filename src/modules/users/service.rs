use learnhub_core::AppError;
use learnhub_db::{UserDirectory, UserRecord};
use tracing::instrument;
use uuid::Uuid;

pub struct UserService;

impl UserService {
    #[instrument(skip(directory))]
    pub async fn get_user(directory: &dyn UserDirectory, id: Uuid) -> Result<UserRecord, AppError> {
        directory
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
