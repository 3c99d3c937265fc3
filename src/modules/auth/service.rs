use learnhub_auth::{AuthUser, SignedTokenCodec};
use learnhub_core::{AppError, verify_password};
use learnhub_db::UserDirectory;
use tracing::{info, instrument, warn};

use super::model::{IssuedSession, LoginRequest};

pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub struct AuthService;

impl AuthService {
    /// Checks the password against the directory and issues a session token
    /// for `ttl_seconds`. Unknown email and wrong password fail identically.
    #[instrument(skip_all, fields(email = %dto.email))]
    pub async fn login_user(
        directory: &dyn UserDirectory,
        codec: &SignedTokenCodec,
        ttl_seconds: i64,
        dto: LoginRequest,
    ) -> Result<IssuedSession, AppError> {
        let Some(credentials) = directory.find_credentials_by_email(&dto.email).await? else {
            warn!("Login attempt for unknown email");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        };

        if !verify_password(&dto.password, &credentials.password_hash)? {
            warn!(user_id = %credentials.user.id, "Login attempt with wrong password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        let record = credentials.user;
        let token = codec.issue(record.id, &record.email, record.role, ttl_seconds)?;

        info!(user_id = %record.id, role = %record.role, "User logged in");

        Ok(IssuedSession {
            user: AuthUser {
                id: record.id,
                email: record.email,
                role: record.role,
            },
            token,
        })
    }
}
