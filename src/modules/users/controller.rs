use axum::Json;
use axum::extract::{Path, State};
use learnhub_auth::AuthUser;
use learnhub_core::{ApiResponse, AppError};
use learnhub_db::UserRecord;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::auth::controller::{ErrorResponse, ProfileResponse};
use crate::state::AppState;

use super::service::UserService;

/// Get any user's profile (admin only)
#[utoipa::path(
    get,
    path = "/api/admin/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = ProfileResponse),
        (status = 401, description = "Not authenticated, or not an admin", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Admin"
)]
#[instrument(skip(state, auth_user), fields(admin_id = %auth_user.id))]
pub async fn get_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserRecord>>, AppError> {
    let user = UserService::get_user(state.directory.as_ref(), id).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// Get the signed-in student's own profile (student only)
#[utoipa::path(
    get,
    path = "/api/student/profile",
    responses(
        (status = 200, description = "Student profile", body = ProfileResponse),
        (status = 401, description = "Not authenticated, or not a student", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Student"
)]
#[instrument(skip_all, fields(student_id = %auth_user.id))]
pub async fn get_own_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<ApiResponse<UserRecord>>, AppError> {
    let user = UserService::get_user(state.directory.as_ref(), auth_user.id).await?;
    Ok(Json(ApiResponse::ok(user)))
}
