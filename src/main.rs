use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use learnhub::logging::init_tracing;
use learnhub::router::init_router;
use learnhub::state::AppState;
use learnhub_config::{CookieConfig, CorsConfig, JwtConfig, ServerConfig};
use learnhub_db::{PgUserDirectory, init_db_pool};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let _log_guards = init_tracing().context("failed to initialize logging")?;

    // Refuse to serve with a missing or weak signing secret
    let jwt_config = JwtConfig::from_env().context("invalid JWT configuration")?;
    let cookie_config = CookieConfig::from_env();
    let secure_cookie = cookie_config.secure;
    let cors_config = CorsConfig::from_env();
    let server_config = ServerConfig::from_env();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = init_db_pool(&database_url)
        .await
        .context("failed to initialize database")?;

    let directory = Arc::new(PgUserDirectory::new(pool));
    let state = AppState::new(jwt_config, cookie_config, cors_config, directory);
    let app = init_router(state, &server_config.frontend_dir);

    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    info!(
        address = %address,
        secure_cookie,
        "Server running; Swagger UI at /swagger-ui"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
