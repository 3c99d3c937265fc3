use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{check_session, current_user, login_user, logout_user};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login_user))
        .route("/logout", post(logout_user))
        .route("/check", get(check_session))
        .route("/me", get(current_user))
}
