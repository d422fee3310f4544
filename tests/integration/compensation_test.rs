//! Integration tests for compensation record endpoints.

mod helpers;

use http::StatusCode;
use uuid::Uuid;

fn salary_body(user_id: Uuid) -> serde_json::Value {
    serde_json::json!({
        "user_id": user_id,
        "salary": 1200,
        "next_salary_increase": "2025-03-01",
    })
}

async fn create_record(app: &helpers::TestApp, user_id: Uuid, token: &str) -> Uuid {
    let response = app
        .request("POST", "/user/salary", Some(salary_body(user_id)), Some(token))
        .await;
    assert_eq!(
        response.status,
        StatusCode::OK,
        "Salary creation failed: {:?}",
        response.body
    );
    response.uuid("salary_id")
}

#[tokio::test]
async fn test_create_and_read_own_record() {
    let app = helpers::TestApp::new();
    let anna = app.create_user("anna").await;
    let token = app.login("anna").await;

    let salary_id = create_record(&app, anna, &token).await;

    let response = app.request("GET", "/user/salary", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.uuid("salary_id"), salary_id);
    assert_eq!(response.uuid("user_id"), anna);
    assert_eq!(response.body["salary"], 1200.0);
    assert_eq!(response.body["next_salary_increase"], "2025-03-01");
}

#[tokio::test]
async fn test_own_record_missing() {
    let app = helpers::TestApp::new();
    let anna = app.create_user("anna").await;
    let token = app.login("anna").await;

    let response = app.request("GET", "/user/salary/", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.message(),
        format!("Your salary info not found (user_id = {anna}).")
    );
}

#[tokio::test]
async fn test_second_record_is_store_error() {
    let app = helpers::TestApp::new();
    let anna = app.create_user("anna").await;
    let token = app.login("anna").await;
    create_record(&app, anna, &token).await;

    let response = app
        .request("POST", "/user/salary", Some(salary_body(anna)), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_create_for_missing_user() {
    let app = helpers::TestApp::new();
    app.create_superuser("root").await;
    let token = app.login("root").await;
    let missing = Uuid::new_v4();

    let response = app
        .request("POST", "/user/salary", Some(salary_body(missing)), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), format!("User with id {missing} not found."));
}

#[tokio::test]
async fn test_create_for_deactivated_user() {
    let app = helpers::TestApp::new();
    app.create_superuser("root").await;
    let gone = app.create_user("gone").await;
    let token = app.login("root").await;
    app.request("DELETE", &format!("/user?user_id={gone}"), None, Some(&token))
        .await;

    let response = app
        .request("POST", "/user/salary", Some(salary_body(gone)), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.message(), format!("User with id {gone} is deactivated."));
}

#[tokio::test]
async fn test_ordinary_cannot_create_for_others() {
    let app = helpers::TestApp::new();
    app.create_user("anna").await;
    let bob = app.create_user("bob").await;
    let token = app.login("anna").await;

    let response = app
        .request("POST", "/user/salary", Some(salary_body(bob)), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_invalid_review_date_rejected() {
    let app = helpers::TestApp::new();
    let anna = app.create_user("anna").await;
    let token = app.login("anna").await;

    let response = app
        .request(
            "POST",
            "/user/salary",
            Some(serde_json::json!({
                "user_id": anna,
                "salary": 1200,
                "next_salary_increase": "01.03.2025",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_admin_updates_and_deletes_ordinary_record() {
    let app = helpers::TestApp::new();
    app.create_admin("admin").await;
    let worker = app.create_user("worker").await;
    let admin_token = app.login("admin").await;
    let worker_token = app.login("worker").await;
    let salary_id = create_record(&app, worker, &admin_token).await;

    let response = app
        .request(
            "PATCH",
            &format!("/user/salary?salary_id={salary_id}"),
            Some(serde_json::json!({ "salary": 1500.5 })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.uuid("updated_salary_id"), salary_id);

    let own = app
        .request("GET", "/user/salary", None, Some(&worker_token))
        .await;
    assert_eq!(own.body["salary"], 1500.5);
    assert_eq!(own.body["next_salary_increase"], "2025-03-01");

    let response = app
        .request(
            "DELETE",
            &format!("/user/salary?salary_id={salary_id}"),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.uuid("deleted_salary_id"), salary_id);

    let own = app
        .request("GET", "/user/salary", None, Some(&worker_token))
        .await;
    assert_eq!(own.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_cannot_manage_peer_record() {
    let app = helpers::TestApp::new();
    app.create_admin("admin").await;
    let peer = app.create_admin("peer").await;
    let peer_token = app.login("peer").await;
    let admin_token = app.login("admin").await;
    let salary_id = create_record(&app, peer, &peer_token).await;

    let response = app
        .request(
            "PATCH",
            &format!("/user/salary?salary_id={salary_id}"),
            Some(serde_json::json!({ "salary": 1.0 })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "DELETE",
            &format!("/user/salary?salary_id={salary_id}"),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_empty_record_update_rejected() {
    let app = helpers::TestApp::new();
    let anna = app.create_user("anna").await;
    let token = app.login("anna").await;
    let salary_id = create_record(&app, anna, &token).await;

    let response = app
        .request(
            "PATCH",
            &format!("/user/salary?salary_id={salary_id}"),
            Some(serde_json::json!({})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.message(),
        "At least one parameter for salary info update should be provided"
    );
}

#[tokio::test]
async fn test_missing_record_is_not_found() {
    let app = helpers::TestApp::new();
    app.create_superuser("root").await;
    let token = app.login("root").await;
    let missing = Uuid::new_v4();

    let response = app
        .request(
            "DELETE",
            &format!("/user/salary?salary_id={missing}"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.message(),
        format!("Salary info with id {missing} not found.")
    );
}

#[tokio::test]
async fn test_malformed_salary_id_is_validation_error() {
    let app = helpers::TestApp::new();
    app.create_superuser("root").await;
    let token = app.login("root").await;

    let malformed = app
        .request("DELETE", "/user/salary?salary_id=zzz", None, Some(&token))
        .await;
    assert_eq!(malformed.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(malformed.body["error"], "VALIDATION_ERROR");

    let missing = app
        .request(
            "PATCH",
            "/user/salary",
            Some(serde_json::json!({ "salary": 1000 })),
            Some(&token),
        )
        .await;
    assert_eq!(missing.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(missing.body["error"], "VALIDATION_ERROR");
}
