use learnhub_auth::{AuthUser, Role};
use learnhub_db::UserRecord;
use utoipa::OpenApi;

use crate::modules::auth::controller::{
    ErrorResponse, ProfileResponse, SessionResponse, SuccessResponse,
};
use crate::modules::auth::model::LoginRequest;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "LearnHub API",
        description = "Session authentication for the LearnHub learning platform. \
            Sessions travel in the HttpOnly `lms-auth-token` cookie."
    ),
    paths(
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::logout_user,
        crate::modules::auth::controller::check_session,
        crate::modules::auth::controller::current_user,
        crate::modules::users::controller::get_user,
        crate::modules::users::controller::get_own_profile,
    ),
    components(schemas(
        LoginRequest,
        AuthUser,
        Role,
        UserRecord,
        SessionResponse,
        ProfileResponse,
        SuccessResponse,
        ErrorResponse,
    )),
    tags(
        (name = "Authentication", description = "Login, logout and session checks"),
        (name = "Admin", description = "Admin-only endpoints"),
        (name = "Student", description = "Student-only endpoints")
    )
)]
pub struct ApiDoc;
