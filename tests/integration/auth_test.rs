//! Integration tests for the login endpoint and bearer token handling.

mod helpers;

use chrono::Duration;
use http::StatusCode;

use staffhub_auth::jwt::JwtEncoder;

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new();
    app.create_user("ivan").await;

    let response = app.login_with("ivan", helpers::PASSWORD).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["token_type"], "bearer");
    assert!(response.body["access_token"].as_str().is_some());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = helpers::TestApp::new();
    app.create_user("ivan").await;

    let wrong_password = app.login_with("ivan", "wrongpassword").await;
    let unknown_login = app.login_with("nobody", helpers::PASSWORD).await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_login.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_login.body);
    assert_eq!(wrong_password.message(), "Incorrect username or password");
}

#[tokio::test]
async fn test_incomplete_login_form_is_validation_error() {
    let app = helpers::TestApp::new();
    app.create_user("ivan").await;

    let response = app.login_form("username=ivan").await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(!response.message().is_empty());
}

#[tokio::test]
async fn test_login_route_accepts_trailing_slash() {
    let app = helpers::TestApp::new();
    app.create_user("ivan").await;

    let req = http::Request::builder()
        .method("POST")
        .uri("/login/token/")
        .header(http::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(axum::body::Body::from(format!(
            "username=ivan&password={}",
            helpers::PASSWORD
        )))
        .unwrap();
    let response = tower::ServiceExt::oneshot(app.router.clone(), req)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_token_grants_access() {
    let app = helpers::TestApp::new();
    let user_id = app.create_user("ivan").await;
    let token = app.login("ivan").await;

    let response = app
        .request("GET", &format!("/user?user_id={user_id}"), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["login"], "ivan");
    assert!(response.body.get("hashed_password").is_none());
}

#[tokio::test]
async fn test_missing_token_rejected() {
    let app = helpers::TestApp::new();
    let user_id = app.create_user("ivan").await;

    let response = app
        .request("GET", &format!("/user?user_id={user_id}"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let app = helpers::TestApp::new();
    let user_id = app.create_user("ivan").await;

    let response = app
        .request(
            "GET",
            &format!("/user?user_id={user_id}"),
            None,
            Some("not.a.token"),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Could not validate credentials");
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let app = helpers::TestApp::new();
    let user_id = app.create_user("ivan").await;
    let encoder = JwtEncoder::new(&app.state.config.auth).unwrap();
    let token = encoder.issue("ivan", Duration::minutes(-5)).unwrap();

    let response = app
        .request("GET", &format!("/user?user_id={user_id}"), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Could not validate credentials");
}

#[tokio::test]
async fn test_token_signed_with_other_secret_rejected() {
    let app = helpers::TestApp::new();
    let user_id = app.create_user("ivan").await;
    let mut foreign = app.state.config.auth.clone();
    foreign.jwt_secret = "someone-else".to_string();
    let token = JwtEncoder::new(&foreign)
        .unwrap()
        .issue("ivan", Duration::minutes(5))
        .unwrap();

    let response = app
        .request("GET", &format!("/user?user_id={user_id}"), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_for_unknown_login_rejected() {
    let app = helpers::TestApp::new();
    let user_id = app.create_user("ivan").await;
    let token = app
        .state
        .jwt_encoder
        .issue("ghost", Duration::minutes(5))
        .unwrap();

    let response = app
        .request("GET", &format!("/user?user_id={user_id}"), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}
