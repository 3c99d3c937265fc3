use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::edge::edge_gate;
use crate::middleware::role::{require_admin, require_student};
use crate::modules::auth::router::init_auth_router;
use crate::modules::users::router::{init_admin_router, init_student_router};
use crate::state::AppState;
use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use std::path::Path;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the full application.
///
/// Layer order matters: the edge gate sits outside the routers so it sees
/// page requests and API requests alike, and the CORS and logging layers
/// wrap everything including its redirects.
pub fn init_router(state: AppState, frontend_dir: impl AsRef<Path>) -> Router {
    let cors = cors_layer(&state);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .nest("/auth", init_auth_router())
                .nest(
                    "/admin",
                    init_admin_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
                )
                .nest(
                    "/student",
                    init_student_router().route_layer(middleware::from_fn_with_state(
                        state.clone(),
                        require_student,
                    )),
                ),
        )
        .fallback_service(ServeDir::new(frontend_dir.as_ref()).append_index_html_on_directories(true))
        .with_state(state)
        .layer(middleware::from_fn(edge_gate))
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = state
        .cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    // Credentials are required for the session cookie to cross origins
    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::COOKIE])
        .allow_credentials(true)
}
