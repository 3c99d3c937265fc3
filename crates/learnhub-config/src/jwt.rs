//! Session token signing configuration.
//!
//! The signing secret is process-wide, read-only configuration. It is
//! injected into the token codec at startup and never looked up ambiently.
//! There is deliberately no fallback secret: if `JWT_SECRET` is missing,
//! empty, short or a well-known placeholder, loading fails and the server
//! refuses to start.
//!
//! # Environment Variables
//!
//! - `JWT_SECRET`: HMAC signing secret, at least [`MIN_SECRET_LEN`] bytes (required)
//! - `SESSION_TTL_SECONDS`: session lifetime in seconds (default: 604800, 7 days;
//!   at most [`MAX_SESSION_TTL_SECONDS`])

use std::env;
use std::fmt;

use crate::error::ConfigError;

pub const MIN_SECRET_LEN: usize = 32;
pub const DEFAULT_SESSION_TTL_SECONDS: i64 = 7 * 24 * 60 * 60;
pub const MAX_SESSION_TTL_SECONDS: i64 = 365 * 24 * 60 * 60;

const PLACEHOLDER_SECRETS: &[&str] = &[
    "your-secret-key-change-in-production",
    "your-secret-key",
    "change-me",
    "changeme",
    "secret",
];

#[derive(Clone)]
pub struct JwtConfig {
    secret: String,
    session_ttl: i64,
}

impl JwtConfig {
    /// Builds a config from an explicit secret, rejecting weak values.
    ///
    /// Surrounding whitespace is not key material: it is stripped before
    /// the checks and is not part of the stored secret.
    pub fn new(secret: impl Into<String>, session_ttl: i64) -> Result<Self, ConfigError> {
        let secret = secret.into();
        let trimmed = secret.trim();

        if trimmed.is_empty() {
            return Err(ConfigError::Missing("JWT_SECRET"));
        }
        if PLACEHOLDER_SECRETS
            .iter()
            .any(|p| trimmed.eq_ignore_ascii_case(p))
        {
            return Err(ConfigError::Placeholder("JWT_SECRET"));
        }
        if trimmed.len() < MIN_SECRET_LEN {
            return Err(ConfigError::TooShort {
                name: "JWT_SECRET",
                min: MIN_SECRET_LEN,
            });
        }
        if !(1..=MAX_SESSION_TTL_SECONDS).contains(&session_ttl) {
            return Err(ConfigError::Invalid {
                name: "SESSION_TTL_SECONDS",
                value: session_ttl.to_string(),
            });
        }

        Ok(Self {
            secret: trimmed.to_string(),
            session_ttl,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;
        let session_ttl = env::var("SESSION_TTL_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_SESSION_TTL_SECONDS);

        Self::new(secret, session_ttl)
    }

    pub fn secret(&self) -> &[u8] {
        self.secret.as_bytes()
    }

    /// Session lifetime in seconds, used for both token expiry and cookie `Max-Age`.
    pub fn session_ttl(&self) -> i64 {
        self.session_ttl
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[redacted]")
            .field("session_ttl", &self.session_ttl)
            .finish()
    }
}
