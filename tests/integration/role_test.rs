//! Integration tests for role-based access decisions and admin promotion.

mod helpers;

use http::StatusCode;
use uuid::Uuid;

use staffhub_entity::user::{Role, RoleSet};

async fn rename(app: &helpers::TestApp, target: Uuid, token: &str) -> StatusCode {
    app.request(
        "PATCH",
        &format!("/user?user_id={target}"),
        Some(serde_json::json!({ "name": "Renamed" })),
        Some(token),
    )
    .await
    .status
}

async fn promote(app: &helpers::TestApp, target: Uuid, token: &str) -> helpers::TestResponse {
    app.request(
        "PATCH",
        &format!("/user/admin_privilege?user_id={target}"),
        None,
        Some(token),
    )
    .await
}

#[tokio::test]
async fn test_admin_manages_ordinary_users() {
    let app = helpers::TestApp::new();
    app.create_admin("admin").await;
    let plain = app.create_user("plain").await;
    let token = app.login("admin").await;

    assert_eq!(rename(&app, plain, &token).await, StatusCode::OK);

    let response = app
        .request("DELETE", &format!("/user?user_id={plain}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(!app.stored_user(plain).await.is_active);
}

#[tokio::test]
async fn test_admin_cannot_touch_elevated_users() {
    let app = helpers::TestApp::new();
    app.create_admin("admin").await;
    let peer = app.create_admin("peer").await;
    let root = app.create_superuser("root").await;
    let token = app.login("admin").await;

    assert_eq!(rename(&app, peer, &token).await, StatusCode::FORBIDDEN);
    assert_eq!(rename(&app, root, &token).await, StatusCode::FORBIDDEN);

    let response = app
        .request("DELETE", &format!("/user?user_id={peer}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert!(app.stored_user(peer).await.is_active);
}

#[tokio::test]
async fn test_admin_may_act_on_itself() {
    let app = helpers::TestApp::new();
    let admin = app.create_admin("admin").await;
    let token = app.login("admin").await;

    assert_eq!(rename(&app, admin, &token).await, StatusCode::OK);
}

#[tokio::test]
async fn test_superuser_manages_everyone() {
    let app = helpers::TestApp::new();
    app.create_superuser("root").await;
    let other_root = app.create_superuser("other_root").await;
    let admin = app.create_admin("admin").await;
    let plain = app.create_user("plain").await;
    let token = app.login("root").await;

    assert_eq!(rename(&app, plain, &token).await, StatusCode::OK);
    assert_eq!(rename(&app, admin, &token).await, StatusCode::OK);
    assert_eq!(rename(&app, other_root, &token).await, StatusCode::OK);
}

#[tokio::test]
async fn test_promotion_adds_admin_to_existing_roles() {
    let app = helpers::TestApp::new();
    app.create_superuser("root").await;
    let plain = app.create_user("plain").await;
    let token = app.login("root").await;

    let response = promote(&app, plain, &token).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        app.stored_user(plain).await.roles,
        RoleSet::from_roles([Role::Admin, Role::Ordinary]).unwrap()
    );
}

#[tokio::test]
async fn test_promoting_elevated_user_conflicts() {
    let app = helpers::TestApp::new();
    app.create_superuser("root").await;
    let other_root = app.create_superuser("other_root").await;
    let admin = app.create_admin("admin").await;
    let token = app.login("root").await;

    let response = promote(&app, admin, &token).await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(
        response.message(),
        format!("User with id {admin} already promoted to admin / superuser.")
    );

    let response = promote(&app, other_root, &token).await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(
        app.stored_user(other_root).await.roles,
        RoleSet::from_roles([Role::Superuser]).unwrap()
    );
}

#[tokio::test]
async fn test_only_superuser_promotes() {
    let app = helpers::TestApp::new();
    app.create_admin("admin").await;
    app.create_user("plain").await;
    let target = app.create_user("target").await;

    let admin_token = app.login("admin").await;
    assert_eq!(
        promote(&app, target, &admin_token).await.status,
        StatusCode::FORBIDDEN
    );

    let plain_token = app.login("plain").await;
    assert_eq!(
        promote(&app, target, &plain_token).await.status,
        StatusCode::FORBIDDEN
    );

    assert!(!app.stored_user(target).await.roles.is_elevated());
}

#[tokio::test]
async fn test_self_promotion_is_bad_request() {
    let app = helpers::TestApp::new();
    let root = app.create_superuser("root").await;
    let token = app.login("root").await;

    let response = promote(&app, root, &token).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Cannot manage privileges of itself.");
}

#[tokio::test]
async fn test_promoting_missing_user_is_not_found() {
    let app = helpers::TestApp::new();
    app.create_superuser("root").await;
    let token = app.login("root").await;

    let response = promote(&app, Uuid::new_v4(), &token).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_promotion_route_accepts_trailing_slash() {
    let app = helpers::TestApp::new();
    app.create_superuser("root").await;
    let plain = app.create_user("plain").await;
    let token = app.login("root").await;

    let response = app
        .request(
            "PATCH",
            &format!("/user/admin_privilege/?user_id={plain}"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
}
