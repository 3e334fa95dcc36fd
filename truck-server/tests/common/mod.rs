//! Shared helpers for the HTTP integration tests
//!
//! 每个测试使用独立的内存数据库和假代理，不访问网络。

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use truck_agents::{Agent, AgentError, AgentResponse, AgentResult, Metadata};
use truck_server::db::DbService;
use truck_server::services::{AgentFactory, AgentKind};
use truck_server::{AgentGateway, Config, ServerState, build_router};

/// Echoes the prompt back; reports three sources when tools are enabled
pub struct EchoAgent {
    kind: AgentKind,
}

#[async_trait]
impl Agent for EchoAgent {
    async fn execute(&self, prompt: &str, use_tools: bool) -> AgentResult<AgentResponse> {
        let mut metadata = Metadata::new();
        metadata.insert("agent".to_string(), Value::from(self.kind.as_str()));
        metadata.insert("tools_used".to_string(), Value::from(if use_tools { 3 } else { 0 }));
        Ok(AgentResponse::success(format!("echo: {prompt}"), metadata))
    }

    fn capabilities(&self) -> Vec<String> {
        vec![format!("{}_echo", self.kind.as_str())]
    }
}

pub struct EchoFactory;

impl AgentFactory for EchoFactory {
    fn build(&self, kind: AgentKind) -> AgentResult<Arc<dyn Agent>> {
        Ok(Arc::new(EchoAgent { kind }))
    }
}

/// Every construction fails, as with a missing API key
pub struct MisconfiguredFactory;

impl AgentFactory for MisconfiguredFactory {
    fn build(&self, _kind: AgentKind) -> AgentResult<Arc<dyn Agent>> {
        Err(AgentError::Config("LLM_API_KEY is not set".to_string()))
    }
}

/// Agent whose model call succeeds but reports a failure
pub struct RefusingAgent;

#[async_trait]
impl Agent for RefusingAgent {
    async fn execute(&self, _prompt: &str, _use_tools: bool) -> AgentResult<AgentResponse> {
        Ok(AgentResponse::failure("rate limited"))
    }

    fn capabilities(&self) -> Vec<String> {
        Vec::new()
    }
}

pub struct RefusingFactory;

impl AgentFactory for RefusingFactory {
    fn build(&self, _kind: AgentKind) -> AgentResult<Arc<dyn Agent>> {
        Ok(Arc::new(RefusingAgent))
    }
}

/// Test app backed by a fresh in-memory database
pub struct TestApp {
    pub router: Router,
    pub state: ServerState,
    _work_dir: tempfile::TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_factory(Arc::new(EchoFactory)).await
    }

    pub async fn with_factory(factory: Arc<dyn AgentFactory>) -> Self {
        let work_dir = tempfile::tempdir().unwrap();
        let config = Config::with_overrides(work_dir.path().to_string_lossy().to_string(), 0);
        let db = DbService::memory("test", "test").await.unwrap();
        let state = ServerState::new(config, db.db, AgentGateway::new(factory));

        Self {
            router: build_router(state.clone()),
            state,
            _work_dir: work_dir,
        }
    }

    /// Send a request; returns the status and the parsed JSON body (Null when empty or not JSON)
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        self.send_request(builder.body(body).unwrap()).await
    }

    pub async fn send_raw(&self, method: Method, uri: &str, raw: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(raw.to_string()))
            .unwrap();
        self.send_request(request).await
    }

    async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }
}
