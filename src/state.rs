use std::fmt;
use std::sync::Arc;

use learnhub_auth::{SessionCookie, SignedTokenCodec};
use learnhub_config::{CookieConfig, CorsConfig, JwtConfig};
use learnhub_db::UserDirectory;

use crate::middleware::auth::IdentityResolver;

/// Shared, read-only application state. Every field is either immutable
/// configuration or a handle that is safe to use from concurrent requests.
#[derive(Clone)]
pub struct AppState {
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub codec: Arc<SignedTokenCodec>,
    pub session_cookie: SessionCookie,
    pub resolver: IdentityResolver,
    pub directory: Arc<dyn UserDirectory>,
}

impl AppState {
    pub fn new(
        jwt_config: JwtConfig,
        cookie_config: CookieConfig,
        cors_config: CorsConfig,
        directory: Arc<dyn UserDirectory>,
    ) -> Self {
        let codec = Arc::new(SignedTokenCodec::new(&jwt_config));

        Self {
            resolver: IdentityResolver::new(codec.clone()),
            session_cookie: SessionCookie::new(&cookie_config),
            codec,
            jwt_config,
            cors_config,
            directory,
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("jwt_config", &self.jwt_config)
            .field("cors_config", &self.cors_config)
            .field("session_cookie", &self.session_cookie)
            .finish_non_exhaustive()
    }
}
