//! Issuance and verification of signed session tokens.
//!
//! Tokens are HS256 JWTs carrying [`Claims`]. Verification runs its checks
//! in a fixed order and stops at the first failure:
//!
//! 1. signature (and structural decoding)
//! 2. issuer
//! 3. audience
//! 4. expiry, with no leeway: valid only while `now < exp`
//!
//! The codec is pure and holds no mutable state, so one instance is shared
//! read-only across all requests.
//!
//! # Example
//!
//! ```ignore
//! let codec = SignedTokenCodec::new(&jwt_config);
//! let token = codec.issue(user_id, "ada@example.com", Role::Admin, 3600)?;
//!
//! match codec.verify(&token) {
//!     Ok(user) => println!("hello {}", user.email),
//!     Err(e) => tracing::debug!(reason = e.kind(), "rejected token"),
//! }
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use learnhub_config::JwtConfig;

use crate::claims::{AuthUser, Claims};
use crate::error::{IssueError, TokenError};
use crate::role::Role;

pub const ISSUER: &str = "lms-platform";
pub const AUDIENCE: &str = "lms-users";

const ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Clone)]
pub struct SignedTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl SignedTokenCodec {
    /// Builds a codec around the configured secret. [`JwtConfig`] has
    /// already rejected missing and weak secrets.
    pub fn new(config: &JwtConfig) -> Self {
        // Only the signature is checked by jsonwebtoken. Claim checks run
        // afterwards in `verify_at` so their order and detail are ours.
        let mut validation = Validation::new(ALGORITHM);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(config.secret()),
            decoding_key: DecodingKey::from_secret(config.secret()),
            validation,
        }
    }

    /// Issues a session token valid for `ttl_seconds` from now.
    pub fn issue(
        &self,
        subject: Uuid,
        email: &str,
        role: Role,
        ttl_seconds: i64,
    ) -> Result<String, IssueError> {
        self.issue_at(subject, email, role, ttl_seconds, Utc::now())
    }

    /// Issues a session token as if the current time were `now`.
    pub fn issue_at(
        &self,
        subject: Uuid,
        email: &str,
        role: Role,
        ttl_seconds: i64,
        now: DateTime<Utc>,
    ) -> Result<String, IssueError> {
        let iat = now.timestamp();
        let exp = iat
            .checked_add(ttl_seconds)
            .ok_or(IssueError::TtlOutOfRange(ttl_seconds))?;
        let claims = Claims {
            sub: subject,
            email: email.to_string(),
            role,
            iss: ISSUER.to_string(),
            aud: AUDIENCE.to_string(),
            iat,
            exp,
        };

        Ok(self.sign(&claims)?)
    }

    /// Signs arbitrary claims. Used by issuance and by tests that need
    /// tokens with foreign issuers or audiences.
    pub fn sign(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        encode(&Header::new(ALGORITHM), claims, &self.encoding_key)
    }

    /// Verifies a token against the current time.
    pub fn verify(&self, token: &str) -> Result<AuthUser, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verifies a token as if the current time were `now`.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<AuthUser, TokenError> {
        self.decode_claims(token, now).map(AuthUser::from)
    }

    /// Verifies a token and returns the full claims, including timestamps.
    pub fn decode_claims(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)?.claims;

        if claims.iss != ISSUER {
            return Err(TokenError::IssuerMismatch(claims.iss));
        }
        if claims.aud != AUDIENCE {
            return Err(TokenError::AudienceMismatch(claims.aud));
        }
        if now.timestamp() >= claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

impl fmt::Debug for SignedTokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignedTokenCodec")
            .field("algorithm", &ALGORITHM)
            .field("issuer", &ISSUER)
            .field("audience", &AUDIENCE)
            .finish_non_exhaustive()
    }
}
