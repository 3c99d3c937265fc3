use std::env;

/// Security attributes of the session cookie that vary by deployment.
///
/// Everything else about the cookie (name, `HttpOnly`, `SameSite=Lax`,
/// `Path=/`) is fixed by the transport and not configurable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CookieConfig {
    /// Emit the `Secure` attribute. On in production only, so local
    /// development over plain HTTP keeps working.
    pub secure: bool,
}

impl CookieConfig {
    pub fn from_env() -> Self {
        let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        Self::for_environment(&environment)
    }

    pub fn for_environment(environment: &str) -> Self {
        Self {
            secure: environment.eq_ignore_ascii_case("production"),
        }
    }
}
