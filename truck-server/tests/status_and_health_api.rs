//! /api/, /health and /api/status-checks integration tests

mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;
use shared::models::StatusCheckCreate;
use truck_server::db::repository::{LIST_LIMIT, StatusCheckRepository};

#[tokio::test]
async fn root_says_hello() {
    let app = TestApp::new().await;

    for uri in ["/api/", "/api"] {
        let (status, body) = app.get(uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Hello World"}));
    }
}

#[tokio::test]
async fn health_reports_ok() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn status_checks_are_recorded() {
    let app = TestApp::new().await;

    let (_, empty) = app.get("/api/status-checks").await;
    assert_eq!(empty, json!([]));

    let (status, check) = app
        .post("/api/status-checks", json!({"client_name": "kiosk-1"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(check["client_name"], "kiosk-1");
    assert!(check["id"].is_string());
    assert!(check["timestamp"].as_i64().unwrap() > 0);

    tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    app.post("/api/status-checks", json!({"client_name": "kiosk-2"}))
        .await;

    let (_, list) = app.get("/api/status-checks").await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0], check);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = TestApp::new().await;

    let (status, _) = app.get("/api/orders").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_is_capped_at_limit() {
    let app = TestApp::new().await;
    let repo = StatusCheckRepository::new(app.state.get_db());

    for i in 0..LIST_LIMIT + 5 {
        repo.create(StatusCheckCreate {
            client_name: format!("kiosk-{i}"),
        })
        .await
        .unwrap();
    }

    let (status, list) = app.get("/api/status-checks").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), LIST_LIMIT);
    assert_eq!(LIST_LIMIT, 1000);
}
