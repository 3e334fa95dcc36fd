//! 服务模块
//!
//! - [`agent_gateway`] - 代理网关 (chat / search)
//! - [`http`] - 路由组装与 HTTP 服务

pub mod agent_gateway;
pub mod http;

pub use agent_gateway::{AgentFactory, AgentGateway, AgentKind, LlmAgentFactory};
pub use http::{HttpService, build_app, build_router};
