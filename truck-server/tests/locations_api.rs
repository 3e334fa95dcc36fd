//! /api/locations integration tests

mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

fn plaza() -> serde_json::Value {
    json!({
        "name": "Plaza",
        "address": "1 Main",
        "latitude": 40.0,
        "longitude": -74.0
    })
}

#[tokio::test]
async fn empty_list_returns_sample_locations() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/locations").await;
    assert_eq!(status, StatusCode::OK);

    let locations = body.as_array().unwrap();
    assert_eq!(locations.len(), 2);
    assert_eq!(locations[0]["name"], "Downtown Plaza");
    assert_eq!(locations[1]["name"], "Business District");
    assert!(locations.iter().all(|l| l["active"] == true));
}

#[tokio::test]
async fn create_update_delete_cycle() {
    let app = TestApp::new().await;

    let (status, created) = app.post("/api/locations", plaza()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["active"], true);
    assert!(created["schedule"].is_null());
    let id = created["id"].as_str().unwrap();

    let mut payload = plaza();
    payload["schedule"] = json!("Mon-Fri 11:00-14:00");
    payload["active"] = json!(false);
    let (status, updated) = app.put(&format!("/api/locations/{id}"), payload).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["created_at"], created["created_at"]);
    assert_eq!(updated["schedule"], "Mon-Fri 11:00-14:00");
    assert_eq!(updated["active"], false);

    let (_, list) = app.get("/api/locations").await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0], updated);

    let (status, body) = app.delete(&format!("/api/locations/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Location deleted");
}

#[tokio::test]
async fn missing_location_is_not_found() {
    let app = TestApp::new().await;

    let (status, body) = app.put("/api/locations/nope", plaza()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Location not found");

    let (status, body) = app.delete("/api/locations/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Location not found");
}

#[tokio::test]
async fn latitude_must_be_a_number() {
    let app = TestApp::new().await;

    let mut payload = plaza();
    payload["latitude"] = json!("north");
    let (status, _) = app.post("/api/locations", payload).await;
    assert!(status.is_client_error());
}
