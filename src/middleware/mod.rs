//! Middleware and extractors for the two-tier session enforcement.
//!
//! # Modules
//!
//! - [`edge`]: crypto-free admission gate run before routing
//! - [`auth`]: cryptographic identity resolution and the `AuthUser` extractor
//! - [`role`]: role checks and route-layer guards
//!
//! # Request Flow
//!
//! 1. [`edge::edge_gate`] looks at the path and the cookie's length only and
//!    may redirect page requests to `/login` or `/admin`
//! 2. The route handler (or a guard) resolves the cookie through
//!    [`auth::IdentityResolver`], which verifies the signature, issuer,
//!    audience and expiry
//! 3. [`role::require_role`] compares the identity's role with the route's
//! 4. Business logic runs only after all of the above succeed
//!
//! The edge gate is an admission hint, not an authorization decision.
//!
//! # Example
//!
//! ```ignore
//! use learnhub_auth::AuthUser;
//!
//! // Any signed-in user; rejects with 401 "Not authenticated" otherwise
//! async fn dashboard(auth_user: AuthUser) -> impl IntoResponse {
//!     // ...
//! }
//! ```

pub mod auth;
pub mod edge;
pub mod role;
