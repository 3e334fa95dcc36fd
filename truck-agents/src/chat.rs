//! Conversational agent

use async_trait::async_trait;

use crate::client::{ChatMessage, LlmClient};
use crate::{Agent, AgentConfig, AgentError, AgentResponse, AgentResult};

const SYSTEM_PROMPT: &str = "You are a friendly assistant for a food truck business. \
Answer questions about the menu, locations and opening hours concisely.";

/// General conversation agent
#[derive(Debug, Clone)]
pub struct ChatAgent {
    client: LlmClient,
}

impl ChatAgent {
    pub fn new(config: &AgentConfig) -> AgentResult<Self> {
        Ok(Self {
            client: LlmClient::new(config)?,
        })
    }
}

#[async_trait]
impl Agent for ChatAgent {
    async fn execute(&self, prompt: &str, _use_tools: bool) -> AgentResult<AgentResponse> {
        let messages = [ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)];

        match self.client.complete(&messages).await {
            Ok(completion) => Ok(AgentResponse::success(completion.content, completion.metadata)),
            // 上游拒绝是业务失败，不是传输错误
            Err(e @ AgentError::Upstream { .. }) => Ok(AgentResponse::failure(e.to_string())),
            Err(e) => Err(e),
        }
    }

    fn capabilities(&self) -> Vec<String> {
        vec![
            "conversation".to_string(),
            "question_answering".to_string(),
            "menu_recommendations".to_string(),
        ]
    }
}
