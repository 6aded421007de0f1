mod common;

use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use axum_test::TestServer;
use clck::api::handlers::{lookup_user_handler, register_handler};
use clck::domain::entities::UserId;

fn create_test_server(state: clck::AppState) -> TestServer {
    let app = Router::new()
        .route("/api/users", post(register_handler))
        .route("/api/users/{id}", get(lookup_user_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_register_then_lookup() {
    let state = common::create_test_state();
    let server = create_test_server(state.clone());

    let response = server.post("/api/users").await;
    response.assert_status(StatusCode::CREATED);

    let user_id = response.json::<serde_json::Value>()["user_id"]
        .as_str()
        .unwrap()
        .to_string();
    let parsed: UserId = user_id.parse().unwrap();
    assert!(state.user_service.exists(&parsed));

    let response = server.get(&format!("/api/users/{user_id}")).await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["user_id"], user_id);
}

#[tokio::test]
async fn test_register_issues_distinct_ids() {
    let server = create_test_server(common::create_test_state());

    let first = server.post("/api/users").await.json::<serde_json::Value>();
    let second = server.post("/api/users").await.json::<serde_json::Value>();

    assert_ne!(first["user_id"], second["user_id"]);
}

#[tokio::test]
async fn test_lookup_unknown_user() {
    let server = create_test_server(common::create_test_state());

    server
        .get(&format!("/api/users/{}", UserId::new()))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_lookup_invalid_uuid() {
    let server = create_test_server(common::create_test_state());

    let response = server.get("/api/users/not-a-uuid").await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["message"],
        "Invalid UUID"
    );
}
