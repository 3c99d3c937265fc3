use learnhub_auth::AuthUser;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "A valid email is required"))]
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "password123")]
    pub password: String,
}

/// Outcome of a successful login: the identity and its freshly signed token.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub user: AuthUser,
    pub token: String,
}
