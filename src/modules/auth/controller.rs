use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use learnhub_auth::AuthUser;
use learnhub_core::{ApiResponse, AppError};
use learnhub_db::UserRecord;
use tracing::{info, instrument, warn};
use utoipa::ToSchema;

use crate::middleware::auth::{NOT_AUTHENTICATED, ResolveError};
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::LoginRequest;
use super::service::AuthService;

pub const NO_TOKEN_FOUND: &str = "No token found";
pub const INVALID_TOKEN: &str = "Invalid token";

#[derive(ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    #[schema(example = "Not authenticated")]
    pub error: String,
}

#[derive(ToSchema)]
pub struct SuccessResponse {
    #[schema(example = true)]
    pub success: bool,
}

#[derive(ToSchema)]
pub struct SessionResponse {
    pub success: bool,
    pub data: AuthUser,
    pub message: Option<String>,
}

#[derive(ToSchema)]
pub struct ProfileResponse {
    pub success: bool,
    pub data: UserRecord,
}

/// Log in and receive the session cookie
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful; sets the lms-auth-token cookie", body = SessionResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Invalid email or password", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn login_user(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<AuthUser>>), AppError> {
    let ttl = state.jwt_config.session_ttl();
    let session = AuthService::login_user(state.directory.as_ref(), &state.codec, ttl, dto).await?;

    let jar = state.session_cookie.write(jar, session.token, ttl);
    Ok((
        jar,
        Json(ApiResponse::ok(session.user).with_message("Login successful")),
    ))
}

/// Log out by clearing the session cookie
///
/// Always succeeds, with or without an existing session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Cookie cleared", body = SuccessResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn logout_user(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<ApiResponse<()>>) {
    info!("Session cookie cleared on logout");
    (state.session_cookie.clear(jar), Json(ApiResponse::success()))
}

/// Verify the session cookie
///
/// Distinguishes a missing cookie from an invalid one, and clears an
/// invalid cookie so the browser stops sending it.
#[utoipa::path(
    get,
    path = "/api/auth/check",
    responses(
        (status = 200, description = "Session is valid", body = SessionResponse),
        (status = 401, description = "No token found, or invalid token (cookie cleared)", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn check_session(State(state): State<AppState>, jar: CookieJar) -> Response {
    match state.resolver.resolve(&jar) {
        Ok(user) => Json(ApiResponse::ok(user)).into_response(),
        Err(ResolveError::Absent) => AppError::unauthorized(NO_TOKEN_FOUND).into_response(),
        Err(ResolveError::Invalid(reason)) => {
            warn!(reason = reason.kind(), "Clearing invalid session cookie");
            (
                state.session_cookie.clear(jar),
                AppError::unauthorized(INVALID_TOKEN),
            )
                .into_response()
        }
    }
}

/// Get the current user's profile
///
/// Does not distinguish a missing session from an invalid one and never
/// touches the cookie.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user profile", body = ProfileResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn current_user(
    State(state): State<AppState>,
    identity: Option<AuthUser>,
) -> Result<Json<ApiResponse<UserRecord>>, AppError> {
    let identity = identity.ok_or_else(|| AppError::unauthorized(NOT_AUTHENTICATED))?;

    let profile = state
        .directory
        .find_by_id(identity.id)
        .await?
        .ok_or_else(|| {
            warn!(user_id = %identity.id, "Valid session for a user missing from the directory");
            AppError::unauthorized(NOT_AUTHENTICATED)
        })?;

    Ok(Json(ApiResponse::ok(profile)))
}
