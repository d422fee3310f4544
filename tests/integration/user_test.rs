//! Integration tests for the user directory endpoints.

mod helpers;

use http::StatusCode;
use uuid::Uuid;

#[tokio::test]
async fn test_create_user_returns_public_view() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/user",
            Some(serde_json::json!({
                "login": "anna",
                "name": "Анна",
                "surname": "Smith-Jones",
                "email": "anna@example.com",
                "password": "secret",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["login"], "anna");
    assert_eq!(response.body["name"], "Анна");
    assert_eq!(response.body["is_active"], true);
    assert!(response.body.get("hashed_password").is_none());
    assert!(response.body.get("roles").is_none());
}

#[tokio::test]
async fn test_create_user_validation() {
    let app = helpers::TestApp::new();

    let bad_name = app
        .request(
            "POST",
            "/user",
            Some(serde_json::json!({
                "login": "anna",
                "name": "Anna1",
                "surname": "Smith",
                "email": "anna@example.com",
                "password": "secret",
            })),
            None,
        )
        .await;
    assert_eq!(bad_name.status, StatusCode::UNPROCESSABLE_ENTITY);

    let bad_email = app
        .request(
            "POST",
            "/user",
            Some(serde_json::json!({
                "login": "anna",
                "name": "Anna",
                "surname": "Smith",
                "email": "anna-at-example",
                "password": "secret",
            })),
            None,
        )
        .await;
    assert_eq!(bad_email.status, StatusCode::UNPROCESSABLE_ENTITY);

    let missing_field = app
        .request(
            "POST",
            "/user",
            Some(serde_json::json!({ "login": "anna" })),
            None,
        )
        .await;
    assert_eq!(missing_field.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_duplicate_login_is_store_error() {
    let app = helpers::TestApp::new();
    app.create_user("anna").await;

    let response = app
        .request(
            "POST",
            "/user/",
            Some(serde_json::json!({
                "login": "anna",
                "name": "Anna",
                "surname": "Other",
                "email": "other@example.com",
                "password": "secret",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(response.message().starts_with("Database error"));
}

#[tokio::test]
async fn test_get_missing_user() {
    let app = helpers::TestApp::new();
    app.create_user("anna").await;
    let token = app.login("anna").await;
    let missing = Uuid::new_v4();

    let response = app
        .request("GET", &format!("/user?user_id={missing}"), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), format!("User with id {missing} not found."));
}

#[tokio::test]
async fn test_malformed_user_id_is_validation_error() {
    let app = helpers::TestApp::new();
    app.create_user("anna").await;
    let token = app.login("anna").await;

    let malformed = app
        .request("GET", "/user?user_id=not-a-uuid", None, Some(&token))
        .await;
    assert_eq!(malformed.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(malformed.body["error"], "VALIDATION_ERROR");
    assert!(!malformed.message().is_empty());

    let missing = app.request("GET", "/user", None, Some(&token)).await;
    assert_eq!(missing.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(missing.body["error"], "VALIDATION_ERROR");

    let on_delete = app
        .request("DELETE", "/user?user_id=42", None, Some(&token))
        .await;
    assert_eq!(on_delete.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(on_delete.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_any_authenticated_user_may_read() {
    let app = helpers::TestApp::new();
    app.create_user("anna").await;
    let bob = app.create_user("bob").await;
    let token = app.login("anna").await;

    let response = app
        .request("GET", &format!("/user/?user_id={bob}"), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["login"], "bob");
}

#[tokio::test]
async fn test_update_self() {
    let app = helpers::TestApp::new();
    let anna = app.create_user("anna").await;
    let token = app.login("anna").await;

    let response = app
        .request(
            "PATCH",
            &format!("/user?user_id={anna}"),
            Some(serde_json::json!({ "surname": "Ivanova" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.uuid("updated_user_id"), anna);

    let stored = app.stored_user(anna).await;
    assert_eq!(stored.surname, "Ivanova");
    assert_eq!(stored.name, "Ivan");
}

#[tokio::test]
async fn test_empty_update_rejected() {
    let app = helpers::TestApp::new();
    let anna = app.create_user("anna").await;
    let token = app.login("anna").await;

    let response = app
        .request(
            "PATCH",
            &format!("/user?user_id={anna}"),
            Some(serde_json::json!({})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_update_cannot_change_roles() {
    let app = helpers::TestApp::new();
    let anna = app.create_user("anna").await;
    let token = app.login("anna").await;

    let response = app
        .request(
            "PATCH",
            &format!("/user?user_id={anna}"),
            Some(serde_json::json!({
                "name": "Anna",
                "roles": ["ROLE_PORTAL_SUPERUSER"],
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let stored = app.stored_user(anna).await;
    assert!(!stored.roles.is_elevated());
}

#[tokio::test]
async fn test_ordinary_cannot_update_others() {
    let app = helpers::TestApp::new();
    app.create_user("anna").await;
    let bob = app.create_user("bob").await;
    let token = app.login("anna").await;

    let response = app
        .request(
            "PATCH",
            &format!("/user?user_id={bob}"),
            Some(serde_json::json!({ "name": "Mallory" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.message(), "Forbidden.");
    assert_eq!(app.stored_user(bob).await.name, "Ivan");
}

#[tokio::test]
async fn test_delete_and_deactivate_scenario() {
    let app = helpers::TestApp::new();
    let a = app.create_user("user_a").await;
    let b = app.create_user("user_b").await;
    let s = app.create_superuser("root").await;
    let token_a = app.login("user_a").await;
    let token_s = app.login("root").await;

    // A deletes itself.
    let response = app
        .request("DELETE", &format!("/user?user_id={a}"), None, Some(&token_a))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.uuid("deleted_user_id"), a);

    // The record stays readable, now inactive.
    let response = app
        .request("GET", &format!("/user?user_id={a}"), None, Some(&token_s))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["is_active"], false);

    // A may not delete B.
    let response = app
        .request("DELETE", &format!("/user?user_id={b}"), None, Some(&token_a))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert!(app.stored_user(b).await.is_active);

    // S promotes B once.
    let response = app
        .request(
            "PATCH",
            &format!("/user/admin_privilege?user_id={b}"),
            None,
            Some(&token_s),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.uuid("updated_user_id"), b);
    let promoted = app.stored_user(b).await.roles;
    assert!(promoted.is_admin());
    assert!(!promoted.is_superuser());

    // A second promotion conflicts and leaves the roles alone.
    let response = app
        .request(
            "PATCH",
            &format!("/user/admin_privilege?user_id={b}"),
            None,
            Some(&token_s),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(app.stored_user(b).await.roles, promoted);
    assert_ne!(s, b);
}

#[tokio::test]
async fn test_superuser_cannot_be_deleted() {
    let app = helpers::TestApp::new();
    let root = app.create_superuser("root").await;
    let token = app.login("root").await;

    let response = app
        .request("DELETE", &format!("/user?user_id={root}"), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.message(), "Superuser can't be deleted using API");
    assert!(app.stored_user(root).await.is_active);
}

#[tokio::test]
async fn test_second_delete_is_not_found() {
    let app = helpers::TestApp::new();
    let anna = app.create_user("anna").await;
    let token = app.login("anna").await;

    let first = app
        .request("DELETE", &format!("/user?user_id={anna}"), None, Some(&token))
        .await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app
        .request("DELETE", &format!("/user?user_id={anna}"), None, Some(&token))
        .await;
    assert_eq!(second.status, StatusCode::NOT_FOUND);
}
