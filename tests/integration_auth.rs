mod common;

use axum::http::StatusCode;
use common::{
    PASSWORD, body_json, cookie_value, get, post, post_json, session_set_cookie, setup_test_app,
};
use learnhub::learnhub_auth::Role;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_login_success_sets_session_cookie() {
    let app = setup_test_app().await;

    let response = app
        .send(post_json(
            "/api/auth/login",
            json!({ "email": "admin@learnhub.test", "password": PASSWORD }),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = session_set_cookie(&response).expect("login must set the session cookie");
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));
    assert!(set_cookie.contains("Path=/"));
    assert!(set_cookie.contains("Max-Age=3600"));
    assert!(!set_cookie.contains("Secure"));

    let token = cookie_value(&set_cookie);
    let user = app.codec.verify(&token).unwrap();
    assert_eq!(user.id, app.admin.id);
    assert_eq!(user.role, Role::Admin);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["data"]["email"], "admin@learnhub.test");
    assert_eq!(body["data"]["role"], "admin");
}

#[tokio::test]
async fn test_login_email_is_case_insensitive() {
    let app = setup_test_app().await;

    let response = app
        .send(post_json(
            "/api/auth/login",
            json!({ "email": "Student@LearnHub.test", "password": PASSWORD }),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["role"], "student");
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_email_look_the_same() {
    let app = setup_test_app().await;

    let wrong_password = app
        .send(post_json(
            "/api/auth/login",
            json!({ "email": "admin@learnhub.test", "password": "not-the-password" }),
        ))
        .await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert!(session_set_cookie(&wrong_password).is_none());
    let wrong_password = body_json(wrong_password).await;

    let unknown_email = app
        .send(post_json(
            "/api/auth/login",
            json!({ "email": "nobody@learnhub.test", "password": PASSWORD }),
        ))
        .await;
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    let unknown_email = body_json(unknown_email).await;

    assert_eq!(wrong_password, unknown_email);
    assert_eq!(
        wrong_password,
        json!({ "success": false, "error": "Invalid email or password" })
    );
}

#[tokio::test]
async fn test_login_validation() {
    let app = setup_test_app().await;

    let response = app
        .send(post_json(
            "/api/auth/login",
            json!({ "email": "not-an-email", "password": PASSWORD }),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = app
        .send(post_json("/api/auth/login", json!({ "email": "admin@learnhub.test" })))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_logout_always_succeeds_and_clears_cookie() {
    let app = setup_test_app().await;
    let token = app.token_for(&app.student);

    for cookie in [None, Some("garbage"), Some(token.as_str())] {
        let response = app.send(post("/api/auth/logout", cookie)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let set_cookie = session_set_cookie(&response).expect("logout must clear the cookie");
        assert!(set_cookie.contains("Max-Age=0"));
        assert_eq!(cookie_value(&set_cookie), "");

        assert_eq!(body_json(response).await, json!({ "success": true }));
    }
}

#[tokio::test]
async fn test_check_without_cookie() {
    let app = setup_test_app().await;

    let response = app.send(get("/api/auth/check", None)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(session_set_cookie(&response).is_none());
    assert_eq!(
        body_json(response).await,
        json!({ "success": false, "error": "No token found" })
    );
}

#[tokio::test]
async fn test_check_with_valid_cookie() {
    let app = setup_test_app().await;
    let token = app.token_for(&app.student);

    let response = app.send(get("/api/auth/check", Some(&token))).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(session_set_cookie(&response).is_none());

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], app.student.id.to_string());
    assert_eq!(body["data"]["email"], "student@learnhub.test");
    assert_eq!(body["data"]["role"], "student");
}

#[tokio::test]
async fn test_check_with_tampered_cookie_clears_it() {
    let app = setup_test_app().await;
    let token = app.token_for(&app.student);
    // Swap the first signature character
    let at = token.rfind('.').unwrap() + 1;
    let replacement = if token[at..].starts_with('A') { "B" } else { "A" };
    let token = format!("{}{}{}", &token[..at], replacement, &token[at + 1..]);

    let response = app.send(get("/api/auth/check", Some(&token))).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let set_cookie = session_set_cookie(&response).expect("invalid cookie must be cleared");
    assert!(set_cookie.contains("Max-Age=0"));
    assert_eq!(
        body_json(response).await,
        json!({ "success": false, "error": "Invalid token" })
    );
}

#[tokio::test]
async fn test_check_with_expired_cookie_is_invalid() {
    let app = setup_test_app().await;
    let token = app.expired_token_for(&app.admin);

    let response = app.send(get("/api/auth/check", Some(&token))).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(session_set_cookie(&response).is_some());
    assert_eq!(body_json(response).await["error"], "Invalid token");
}

#[tokio::test]
async fn test_me_returns_directory_profile() {
    let app = setup_test_app().await;
    let token = app.token_for(&app.admin);

    let response = app.send(get("/api/auth/me", Some(&token))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], app.admin.id.to_string());
    assert_eq!(body["data"]["name"], "Ada Admin");
    assert_eq!(body["data"]["role"], "admin");
}

#[tokio::test]
async fn test_me_does_not_distinguish_missing_from_invalid() {
    let app = setup_test_app().await;
    let expired = app.expired_token_for(&app.student);

    for cookie in [None, Some("garbage"), Some(expired.as_str())] {
        let response = app.send(get("/api/auth/me", cookie)).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        // Unlike /check, /me leaves the cookie alone
        assert!(session_set_cookie(&response).is_none());
        assert_eq!(
            body_json(response).await,
            json!({ "success": false, "error": "Not authenticated" })
        );
    }
}

#[tokio::test]
async fn test_me_for_user_missing_from_directory() {
    let app = setup_test_app().await;
    let token = app
        .codec
        .issue(Uuid::new_v4(), "ghost@learnhub.test", Role::Student, 600)
        .unwrap();

    let response = app.send(get("/api/auth/me", Some(&token))).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Not authenticated");
}

#[tokio::test]
async fn test_login_then_me_with_issued_cookie() {
    let app = setup_test_app().await;

    let login = app
        .send(post_json(
            "/api/auth/login",
            json!({ "email": "student@learnhub.test", "password": PASSWORD }),
        ))
        .await;
    let token = cookie_value(&session_set_cookie(&login).unwrap());

    let me = app.send(get("/api/auth/me", Some(&token))).await;
    assert_eq!(me.status(), StatusCode::OK);
    assert_eq!(body_json(me).await["data"]["name"], "Sam Student");
}
