//! Edge admission gate.
//!
//! Runs on every request before routing and decides, from the path and the
//! *shape* of the session cookie alone, whether to redirect the browser.
//! No signature verification happens here. A forged cookie longer than
//! [`MIN_TOKEN_LENGTH`] passes the gate; the protected handlers behind it
//! re-verify through [`crate::middleware::auth::IdentityResolver`].
//!
//! Policy, evaluated in order:
//!
//! 1. protected path (`/admin`, `/student` and below) without a token-shaped
//!    cookie: redirect to `/login`
//! 2. token-shaped cookie on `/login` or `/signup`: redirect to `/admin`
//! 3. anything else: pass through untouched
//!
//! The gate never produces an error response.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use learnhub_auth::SessionCookie;
use tracing::debug;

/// A cookie value must be strictly longer than this to count as a token.
pub const MIN_TOKEN_LENGTH: usize = 50;

pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const ADMIN_HOME_PATH: &str = "/admin";
pub const STUDENT_HOME_PATH: &str = "/student";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    Admin,
    Student,
    Login,
    Signup,
    Public,
}

impl RouteClass {
    pub fn classify(path: &str) -> Self {
        if within(path, ADMIN_HOME_PATH) {
            RouteClass::Admin
        } else if within(path, STUDENT_HOME_PATH) {
            RouteClass::Student
        } else if path == LOGIN_PATH {
            RouteClass::Login
        } else if path == SIGNUP_PATH {
            RouteClass::Signup
        } else {
            RouteClass::Public
        }
    }

    pub fn is_protected(self) -> bool {
        matches!(self, RouteClass::Admin | RouteClass::Student)
    }

    pub fn is_auth_page(self) -> bool {
        matches!(self, RouteClass::Login | RouteClass::Signup)
    }
}

/// `/admin` matches `/admin` and `/admin/...`, but not `/administrator`.
fn within(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDecision {
    PassThrough,
    Redirect(&'static str),
}

/// Coarse shape heuristic, not proof of validity.
pub fn has_token_shape(token: Option<&str>) -> bool {
    token.is_some_and(|t| t.len() > MIN_TOKEN_LENGTH)
}

pub fn evaluate(path: &str, token: Option<&str>) -> EdgeDecision {
    let class = RouteClass::classify(path);
    let has_token = has_token_shape(token);

    if class.is_protected() && !has_token {
        EdgeDecision::Redirect(LOGIN_PATH)
    } else if has_token && class.is_auth_page() {
        EdgeDecision::Redirect(ADMIN_HOME_PATH)
    } else {
        EdgeDecision::PassThrough
    }
}

pub async fn edge_gate(jar: CookieJar, req: Request, next: Next) -> Response {
    let token = SessionCookie::read(&jar);

    match evaluate(req.uri().path(), token.as_deref()) {
        EdgeDecision::PassThrough => next.run(req).await,
        EdgeDecision::Redirect(target) => {
            debug!(path = %req.uri().path(), redirect_to = target, "Edge gate redirect");
            Redirect::temporary(target).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_token() -> String {
        "x".repeat(MIN_TOKEN_LENGTH + 1)
    }

    #[test]
    fn test_classify() {
        assert_eq!(RouteClass::classify("/admin"), RouteClass::Admin);
        assert_eq!(RouteClass::classify("/admin/courses/7"), RouteClass::Admin);
        assert_eq!(RouteClass::classify("/student"), RouteClass::Student);
        assert_eq!(RouteClass::classify("/student/progress"), RouteClass::Student);
        assert_eq!(RouteClass::classify("/login"), RouteClass::Login);
        assert_eq!(RouteClass::classify("/signup"), RouteClass::Signup);
        assert_eq!(RouteClass::classify("/"), RouteClass::Public);
        assert_eq!(RouteClass::classify("/administrator"), RouteClass::Public);
        assert_eq!(RouteClass::classify("/login/help"), RouteClass::Public);
        assert_eq!(RouteClass::classify("/api/admin/users"), RouteClass::Public);
    }

    #[test]
    fn test_protected_without_cookie_redirects_to_login() {
        assert_eq!(evaluate("/admin/x", None), EdgeDecision::Redirect("/login"));
        assert_eq!(evaluate("/student", None), EdgeDecision::Redirect("/login"));
    }

    #[test]
    fn test_short_cookie_is_not_a_token() {
        let exactly_fifty = "x".repeat(MIN_TOKEN_LENGTH);
        assert_eq!(
            evaluate("/admin/x", Some(&exactly_fifty)),
            EdgeDecision::Redirect("/login")
        );
        assert_eq!(evaluate("/admin/x", Some("")), EdgeDecision::Redirect("/login"));
    }

    #[test]
    fn test_long_cookie_passes_without_verification() {
        let token = long_token();
        assert_eq!(evaluate("/admin/x", Some(&token)), EdgeDecision::PassThrough);
        assert_eq!(evaluate("/student/home", Some(&token)), EdgeDecision::PassThrough);
    }

    #[test]
    fn test_auth_pages_with_token_redirect_to_admin() {
        let token = long_token();
        assert_eq!(evaluate("/login", Some(&token)), EdgeDecision::Redirect("/admin"));
        assert_eq!(evaluate("/signup", Some(&token)), EdgeDecision::Redirect("/admin"));
    }

    #[test]
    fn test_auth_pages_without_token_pass() {
        assert_eq!(evaluate("/login", None), EdgeDecision::PassThrough);
        assert_eq!(evaluate("/signup", Some("short")), EdgeDecision::PassThrough);
    }

    #[test]
    fn test_public_paths_always_pass() {
        let token = long_token();
        assert_eq!(evaluate("/", None), EdgeDecision::PassThrough);
        assert_eq!(evaluate("/api/auth/check", None), EdgeDecision::PassThrough);
        assert_eq!(evaluate("/courses", Some(&token)), EdgeDecision::PassThrough);
    }
}
