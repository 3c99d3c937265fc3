use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_own_profile, get_user};

pub fn init_admin_router() -> Router<AppState> {
    Router::new().route("/users/{id}", get(get_user))
}

pub fn init_student_router() -> Router<AppState> {
    Router::new().route("/profile", get(get_own_profile))
}
