#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{Request, Response};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use learnhub::learnhub_auth::{Role, SESSION_COOKIE_NAME, SignedTokenCodec};
use learnhub::learnhub_config::{CookieConfig, CorsConfig, JwtConfig};
use learnhub::learnhub_core::hash_password;
use learnhub::learnhub_db::{InMemoryUserDirectory, NewUser, UserDirectory, UserRecord};
use learnhub::router::init_router;
use learnhub::state::AppState;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret-at-least-32-bytes";
pub const SESSION_TTL: i64 = 3600;
pub const PASSWORD: &str = "password123";

pub struct TestApp {
    pub router: Router,
    pub codec: SignedTokenCodec,
    pub admin: UserRecord,
    pub student: UserRecord,
}

impl TestApp {
    pub fn token_for(&self, user: &UserRecord) -> String {
        self.codec
            .issue(user.id, &user.email, user.role, SESSION_TTL)
            .unwrap()
    }

    pub fn expired_token_for(&self, user: &UserRecord) -> String {
        self.codec
            .issue_at(
                user.id,
                &user.email,
                user.role,
                60,
                Utc::now() - Duration::hours(1),
            )
            .unwrap()
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }
}

pub async fn setup_test_app() -> TestApp {
    let directory = Arc::new(InMemoryUserDirectory::new());
    let admin = seed_user(directory.as_ref(), "admin@learnhub.test", "Ada Admin", Role::Admin).await;
    let student =
        seed_user(directory.as_ref(), "student@learnhub.test", "Sam Student", Role::Student).await;

    let jwt_config = JwtConfig::new(TEST_SECRET, SESSION_TTL).unwrap();
    let codec = SignedTokenCodec::new(&jwt_config);
    let state = AppState::new(
        jwt_config,
        CookieConfig { secure: false },
        CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
        directory,
    );

    TestApp {
        router: init_router(state, fixtures_dir()),
        codec,
        admin,
        student,
    }
}

async fn seed_user(directory: &dyn UserDirectory, email: &str, name: &str, role: Role) -> UserRecord {
    directory
        .create_user(NewUser {
            email: email.to_string(),
            name: name.to_string(),
            role,
            password_hash: hash_password(PASSWORD).unwrap(),
        })
        .await
        .unwrap()
}

pub fn fixtures_dir() -> String {
    format!("{}/tests/fixtures/public", env!("CARGO_MANIFEST_DIR"))
}

fn with_session(
    builder: axum::http::request::Builder,
    token: Option<&str>,
) -> axum::http::request::Builder {
    match token {
        Some(token) => builder.header(COOKIE, format!("{SESSION_COOKIE_NAME}={token}")),
        None => builder,
    }
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    with_session(Request::builder().method("GET").uri(uri), token)
        .body(Body::empty())
        .unwrap()
}

pub fn post(uri: &str, token: Option<&str>) -> Request<Body> {
    with_session(Request::builder().method("POST").uri(uri), token)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The session cookie's `Set-Cookie` header, if the response wrote one.
pub fn session_set_cookie(response: &Response<Body>) -> Option<String> {
    let prefix = format!("{SESSION_COOKIE_NAME}=");
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with(&prefix))
        .map(str::to_string)
}

/// Extracts the token from a `Set-Cookie` header value.
pub fn cookie_value(set_cookie: &str) -> String {
    set_cookie
        .split(';')
        .next()
        .and_then(|pair| pair.split_once('='))
        .map(|(_, value)| value.to_string())
        .unwrap()
}
