//! /api/chat, /api/search and /api/agents/capabilities integration tests

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{MisconfiguredFactory, RefusingFactory, TestApp};
use serde_json::json;

#[tokio::test]
async fn chat_defaults_to_chat_agent() {
    let app = TestApp::new().await;

    let (status, body) = app.post("/api/chat", json!({"message": "hi"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["response"], "echo: hi");
    assert_eq!(body["agent_type"], "chat");
    assert_eq!(body["capabilities"], json!(["chat_echo"]));
    assert_eq!(body["metadata"]["tools_used"], 0);
    assert!(body["error"].is_null());
}

#[tokio::test]
async fn chat_can_route_to_search_agent() {
    let app = TestApp::new().await;

    let (_, body) = app
        .post("/api/chat", json!({"message": "hi", "agent_type": "search"}))
        .await;
    assert_eq!(body["agent_type"], "search");
    assert_eq!(body["metadata"]["agent"], "search");
    // chat 接口从不启用工具
    assert_eq!(body["metadata"]["tools_used"], 0);
}

#[tokio::test]
async fn unknown_agent_type_falls_through_to_chat() {
    let app = TestApp::new().await;

    let (_, body) = app
        .post("/api/chat", json!({"message": "hi", "agent_type": "pirate"}))
        .await;
    assert_eq!(body["success"], true);
    assert_eq!(body["agent_type"], "pirate");
    assert_eq!(body["metadata"]["agent"], "chat");
}

#[tokio::test]
async fn search_wraps_query_and_counts_sources() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post("/api/search", json!({"query": "best tacos"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["query"], "best tacos");
    assert_eq!(
        body["summary"],
        "echo: Search for information about: best tacos. Provide a comprehensive summary with key findings."
    );
    assert_eq!(body["sources_count"], 3);
    assert_eq!(body["search_results"]["agent"], "search");
}

#[tokio::test]
async fn misconfigured_agents_fail_in_the_body() {
    let app = TestApp::with_factory(Arc::new(MisconfiguredFactory)).await;

    let (status, body) = app.post("/api/chat", json!({"message": "hi"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["response"], "");
    assert_eq!(body["capabilities"], json!([]));
    assert!(body["error"].as_str().unwrap().contains("LLM_API_KEY"));

    let (status, body) = app.post("/api/search", json!({"query": "q"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["summary"], "");
    assert_eq!(body["sources_count"], 0);
    assert!(body["search_results"].is_null());

    let (status, body) = app.get("/api/agents/capabilities").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert!(body.get("capabilities").is_none());
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn agent_reported_failure_is_passed_through() {
    let app = TestApp::with_factory(Arc::new(RefusingFactory)).await;

    let (_, body) = app.post("/api/chat", json!({"message": "hi"})).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "rate limited");

    let (_, body) = app.post("/api/search", json!({"query": "q"})).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "rate limited");
}

#[tokio::test]
async fn capabilities_lists_both_agents() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/agents/capabilities").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["capabilities"]["search_agent"], json!(["search_echo"]));
    assert_eq!(body["capabilities"]["chat_agent"], json!(["chat_echo"]));
}

#[tokio::test]
async fn chat_requires_message() {
    let app = TestApp::new().await;

    let (status, _) = app.post("/api/chat", json!({"agent_type": "chat"})).await;
    assert!(status.is_client_error());
}
