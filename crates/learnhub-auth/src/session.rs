//! Cookie transport for the session token.
//!
//! The token travels in the `lms-auth-token` cookie with fixed attributes:
//! `HttpOnly`, `SameSite=Lax`, `Path=/`, plus `Secure` when configured for
//! production. The server only writes or clears the cookie; its value is
//! interpreted solely through [`crate::SignedTokenCodec`].

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use learnhub_config::CookieConfig;

pub const SESSION_COOKIE_NAME: &str = "lms-auth-token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    secure: bool,
}

impl SessionCookie {
    pub fn new(config: &CookieConfig) -> Self {
        Self {
            secure: config.secure,
        }
    }

    /// Sets the session cookie to `token`, expiring after `ttl_seconds`.
    pub fn write(&self, jar: CookieJar, token: impl Into<String>, ttl_seconds: i64) -> CookieJar {
        jar.add(self.build(token.into(), ttl_seconds))
    }

    /// Overwrites the session cookie with an empty value and `Max-Age=0`,
    /// telling the browser to drop it immediately. Clearing a jar that
    /// never held the cookie is fine.
    pub fn clear(&self, jar: CookieJar) -> CookieJar {
        jar.add(self.build(String::new(), 0))
    }

    /// Returns the raw cookie value, if any. No verification happens here.
    /// An empty value (what [`SessionCookie::clear`] leaves behind) reads
    /// as absent.
    pub fn read(jar: &CookieJar) -> Option<String> {
        jar.get(SESSION_COOKIE_NAME)
            .map(|cookie| cookie.value().to_string())
            .filter(|value| !value.is_empty())
    }

    fn build(&self, value: String, max_age_seconds: i64) -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE_NAME, value))
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .path("/")
            .max_age(time::Duration::seconds(max_age_seconds))
            .build()
    }
}
