//! # LearnHub Auth
//!
//! Session authentication primitives for the LearnHub API.
//!
//! This crate provides:
//!
//! - [`role`]: the [`Role`] enum (`admin`, `student`)
//! - [`claims`]: the signed credential payload ([`Claims`]) and the trusted
//!   per-request identity ([`AuthUser`])
//! - [`codec`]: [`SignedTokenCodec`], which issues and verifies credentials
//! - [`error`]: [`TokenError`], the detailed verification failure
//! - [`session`]: [`SessionCookie`], the `lms-auth-token` cookie transport
//!
//! # Trust Model
//!
//! A credential is valid only if its HS256 signature matches the configured
//! secret, `iss == "lms-platform"`, `aud == "lms-users"` and it has not
//! expired. [`TokenError`] records which check failed for logs and tests;
//! HTTP handlers must collapse every variant into one opaque "invalid" answer.
//!
//! # Example
//!
//! ```ignore
//! use learnhub_auth::{Role, SignedTokenCodec};
//! use learnhub_config::JwtConfig;
//!
//! let config = JwtConfig::from_env()?;
//! let codec = SignedTokenCodec::new(&config);
//!
//! let token = codec.issue(user_id, "ada@example.com", Role::Student, config.session_ttl())?;
//! let user = codec.verify(&token)?;
//! assert_eq!(user.role, Role::Student);
//! ```

pub mod claims;
pub mod codec;
pub mod error;
pub mod role;
pub mod session;

// Re-export commonly used types at crate root
pub use claims::{AuthUser, Claims};
pub use codec::{AUDIENCE, ISSUER, SignedTokenCodec};
pub use error::{IssueError, TokenError};
pub use role::{ParseRoleError, Role};
pub use session::{SESSION_COOKIE_NAME, SessionCookie};
