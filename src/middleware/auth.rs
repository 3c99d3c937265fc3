use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::cookie::CookieJar;
use learnhub_auth::{AuthUser, SessionCookie, SignedTokenCodec, TokenError};
use learnhub_core::AppError;
use tracing::debug;

use crate::state::AppState;

pub const NOT_AUTHENTICATED: &str = "Not authenticated";

/// Why no identity could be resolved. `Invalid` keeps the detailed
/// [`TokenError`] for logging; it must not reach the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    Absent,
    Invalid(TokenError),
}

/// Server-side identity check: reads the session cookie and verifies it
/// cryptographically. Runs on every protected request; nothing is cached
/// across requests.
#[derive(Debug, Clone)]
pub struct IdentityResolver {
    codec: Arc<SignedTokenCodec>,
}

impl IdentityResolver {
    pub fn new(codec: Arc<SignedTokenCodec>) -> Self {
        Self { codec }
    }

    pub fn resolve(&self, jar: &CookieJar) -> Result<AuthUser, ResolveError> {
        let token = SessionCookie::read(jar).ok_or(ResolveError::Absent)?;

        self.codec.verify(&token).map_err(|reason| {
            debug!(reason = reason.kind(), "Session token rejected");
            ResolveError::Invalid(reason)
        })
    }

    /// The caller's identity, or `None` when there is no session or the
    /// session is invalid. The two cases are deliberately indistinguishable.
    pub fn current_identity(&self, jar: &CookieJar) -> Option<AuthUser> {
        self.resolve(jar).ok()
    }
}

/// Identity resolved once per request and stored in the request extensions
/// so that route-layer guards and handler extractors share one verification.
#[derive(Debug, Clone)]
struct ResolvedIdentity(Option<AuthUser>);

pub(crate) fn resolve_memoized(parts: &mut Parts, state: &AppState) -> Option<AuthUser> {
    if let Some(ResolvedIdentity(identity)) = parts.extensions.get::<ResolvedIdentity>() {
        return identity.clone();
    }

    let jar = CookieJar::from_headers(&parts.headers);
    let identity = state.resolver.current_identity(&jar);
    parts
        .extensions
        .insert(ResolvedIdentity(identity.clone()));
    identity
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        resolve_memoized(parts, state).ok_or_else(|| AppError::unauthorized(NOT_AUTHENTICATED))
    }
}

impl OptionalFromRequestParts<AppState> for AuthUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(resolve_memoized(parts, state))
    }
}
