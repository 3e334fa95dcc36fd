//! Agent gateway request / response shapes
//!
//! 代理失败不会变成 HTTP 错误：调用方应检查 `success` 字段。

use serde::{Deserialize, Serialize};

pub type Metadata = serde_json::Map<String, serde_json::Value>;

fn default_agent_type() -> String {
    "chat".to_string()
}

fn default_max_results() -> u32 {
    5
}

/// POST /api/chat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// "chat" | "search"
    #[serde(default = "default_agent_type")]
    pub agent_type: String,
    #[serde(default)]
    pub context: Option<Metadata>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    pub agent_type: String,
    pub capabilities: Vec<String>,
    #[serde(default)]
    pub metadata: Metadata,
    pub error: Option<String>,
}

impl ChatResponse {
    pub fn failure(agent_type: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            response: String::new(),
            agent_type: agent_type.into(),
            capabilities: Vec::new(),
            metadata: Metadata::new(),
            error: Some(error.into()),
        }
    }
}

/// POST /api/search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    pub query: String,
    pub summary: String,
    pub search_results: Option<Metadata>,
    pub sources_count: u64,
    pub error: Option<String>,
}

impl SearchResponse {
    pub fn failure(query: impl Into<String>, error: Option<String>) -> Self {
        Self {
            success: false,
            query: query.into(),
            summary: String::new(),
            search_results: None,
            sources_count: 0,
            error,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentCapabilities {
    pub search_agent: Vec<String>,
    pub chat_agent: Vec<String>,
}

/// GET /api/agents/capabilities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapabilitiesResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<AgentCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
