//! Agent contract

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::AgentResult;

/// Free-form metadata attached to an agent answer
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Structured result of one agent execution
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentResponse {
    pub success: bool,
    pub content: String,
    #[serde(default)]
    pub metadata: Metadata,
    pub error: Option<String>,
}

impl AgentResponse {
    pub fn success(content: impl Into<String>, metadata: Metadata) -> Self {
        Self {
            success: true,
            content: content.into(),
            metadata,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            content: String::new(),
            metadata: Metadata::new(),
            error: Some(error.into()),
        }
    }

    /// `metadata.tools_used`, 0 when absent or not a number
    pub fn tools_used(&self) -> u64 {
        self.metadata
            .get("tools_used")
            .and_then(|v| v.as_u64())
            .unwrap_or(0)
    }
}

/// A language-model backed agent.
///
/// `execute` takes `&self` and must be reentrant: one instance is shared by
/// every request for the lifetime of the process.
#[async_trait]
pub trait Agent: Send + Sync {
    async fn execute(&self, prompt: &str, use_tools: bool) -> AgentResult<AgentResponse>;

    fn capabilities(&self) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tools_used_defaults_to_zero() {
        let response = AgentResponse::success("ok", Metadata::new());
        assert_eq!(response.tools_used(), 0);

        let mut metadata = Metadata::new();
        metadata.insert("tools_used".to_string(), serde_json::json!(3));
        let response = AgentResponse::success("ok", metadata);
        assert_eq!(response.tools_used(), 3);
    }

    #[test]
    fn test_failure_carries_error() {
        let response = AgentResponse::failure("boom");
        assert!(!response.success);
        assert!(response.content.is_empty());
        assert_eq!(response.error.as_deref(), Some("boom"));
    }
}
