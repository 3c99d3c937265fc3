use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use thiserror::Error;

/// Why a session token failed verification.
///
/// This detail is for server-side logs and tests only. Responses must not
/// reveal which variant occurred; see the identity resolver for the
/// collapsed form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token signature does not match")]
    InvalidSignature,

    #[error("token has expired")]
    Expired,

    #[error("token issuer mismatch: {0}")]
    IssuerMismatch(String),

    #[error("token audience mismatch: {0}")]
    AudienceMismatch(String),

    #[error("token is malformed: {0}")]
    Malformed(String),
}

impl TokenError {
    /// Stable short label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            TokenError::InvalidSignature => "invalid_signature",
            TokenError::Expired => "expired",
            TokenError::IssuerMismatch(_) => "issuer_mismatch",
            TokenError::AudienceMismatch(_) => "audience_mismatch",
            TokenError::Malformed(_) => "malformed",
        }
    }
}

/// Why a session token could not be issued.
#[derive(Debug, Error)]
pub enum IssueError {
    #[error("token lifetime of {0} seconds does not fit in a timestamp")]
    TtlOutOfRange(i64),

    #[error("failed to sign token: {0}")]
    Signing(#[from] JwtError),
}

impl From<JwtError> for TokenError {
    fn from(err: JwtError) -> Self {
        match err.kind() {
            // A token signed with another algorithm cannot have been signed
            // with our key, so it is reported as a signature failure.
            ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                TokenError::InvalidSignature
            }
            _ => TokenError::Malformed(err.to_string()),
        }
    }
}
