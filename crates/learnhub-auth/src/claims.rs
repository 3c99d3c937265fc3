//! The signed credential payload and the identity it resolves to.
//!
//! - [`Claims`]: exactly what is signed into the session token
//! - [`AuthUser`]: the trusted "who is calling" value handed to handlers

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::role::Role;

/// JWT claims for session tokens.
///
/// # Fields
///
/// - `sub`: User ID (subject)
/// - `email`: User's email address
/// - `role`: Authorization role
/// - `iss`: Issuer, always `lms-platform` for tokens we mint
/// - `aud`: Audience, always `lms-users` for tokens we mint
/// - `iat`: Issued-at timestamp (Unix seconds)
/// - `exp`: Expiration timestamp (Unix seconds)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub role: Role,
    pub iss: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

/// Resolved identity of the caller.
///
/// Only [`crate::SignedTokenCodec::verify`] produces this from request data.
/// It lives for a single request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            email: claims.email,
            role: claims.role,
        }
    }
}

impl AuthUser {
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}
