//! Role-based authorization.
//!
//! Every protected operation runs: resolve identity, then
//! [`require_presence`] or [`require_role`], then business logic. Roles are
//! matched exactly; there is no hierarchy, so an admin-only route accepts
//! [`Role::Admin`] and nothing else.
//!
//! Whole routers are guarded with [`require_admin`] / [`require_student`];
//! handlers can call the helper functions directly.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use learnhub_auth::{AuthUser, Role};
use learnhub_core::AppError;
use tracing::warn;

use crate::middleware::auth::{NOT_AUTHENTICATED, resolve_memoized};
use crate::state::AppState;

pub const UNAUTHORIZED: &str = "Unauthorized";

/// Fails with 401 unless an identity is present.
pub fn require_presence(identity: Option<&AuthUser>) -> Result<&AuthUser, AppError> {
    identity.ok_or_else(|| AppError::unauthorized(NOT_AUTHENTICATED))
}

/// Fails with 401 unless an identity is present and holds exactly `role`.
pub fn require_role(identity: Option<&AuthUser>, role: Role) -> Result<&AuthUser, AppError> {
    let user = require_presence(identity)?;

    if !user.has_role(role) {
        warn!(
            user_id = %user.id,
            role = %user.role,
            required = %role,
            "Role check failed"
        );
        return Err(AppError::unauthorized(UNAUTHORIZED));
    }

    Ok(user)
}

async fn guard(state: AppState, req: Request, next: Next, role: Role) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let identity = resolve_memoized(&mut parts, &state);
    require_role(identity.as_ref(), role)?;

    Ok(next.run(Request::from_parts(parts, body)).await)
}

/// Route-layer guard for admin-only routers.
///
/// ```rust,ignore
/// Router::new()
///     .nest("/admin", admin_router.route_layer(
///         middleware::from_fn_with_state(state.clone(), require_admin),
///     ));
/// ```
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    guard(state, req, next, Role::Admin)
        .await
        .unwrap_or_else(IntoResponse::into_response)
}

/// Route-layer guard for student-only routers.
pub async fn require_student(State(state): State<AppState>, req: Request, next: Next) -> Response {
    guard(state, req, next, Role::Student)
        .await
        .unwrap_or_else(IntoResponse::into_response)
}
