//! Agent API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/chat | POST | 与代理对话 |
//! | /api/search | POST | 搜索并总结 |
//! | /api/agents/capabilities | GET | 代理能力列表 |
//!
//! 所有接口都返回 200；失败信息在响应体的 `success` / `error` 字段中。

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/chat", post(handler::chat))
        .route("/api/search", post(handler::search))
        .route("/api/agents/capabilities", get(handler::capabilities))
}
