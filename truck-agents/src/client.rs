//! OpenAI-compatible chat/completions client

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{AgentConfig, AgentError, AgentResult, Metadata};

/// One chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    model: Option<String>,
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize, Serialize)]
struct Usage {
    #[serde(default)]
    prompt_tokens: u64,
    #[serde(default)]
    completion_tokens: u64,
    #[serde(default)]
    total_tokens: u64,
}

/// Text answer plus metadata (model, token usage)
#[derive(Debug, Clone)]
pub struct Completion {
    pub content: String,
    pub metadata: Metadata,
}

/// Thin HTTP client shared by the chat and search agents
#[derive(Debug, Clone)]
pub struct LlmClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl LlmClient {
    /// Fails with [`AgentError::Config`] when no API key is configured
    pub fn new(config: &AgentConfig) -> AgentResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| AgentError::Config("LLM_API_KEY is not set".to_string()))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            api_key,
            model: config.model.clone(),
        })
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub async fn complete(&self, messages: &[ChatMessage]) -> AgentResult<Completion> {
        let body = CompletionRequest {
            model: &self.model,
            messages,
        };

        tracing::debug!(model = %self.model, messages = messages.len(), "Sending completion request");

        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AgentError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: CompletionResponse = resp.json().await?;
        parse_completion(parsed, &self.model)
    }
}

fn parse_completion(resp: CompletionResponse, requested_model: &str) -> AgentResult<Completion> {
    let content = resp
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .ok_or_else(|| AgentError::InvalidResponse("no choices in completion".to_string()))?;

    let mut metadata = Metadata::new();
    metadata.insert(
        "model".to_string(),
        serde_json::Value::String(resp.model.unwrap_or_else(|| requested_model.to_string())),
    );
    if let Some(usage) = resp.usage
        && let Ok(value) = serde_json::to_value(usage)
    {
        metadata.insert("usage".to_string(), value);
    }

    Ok(Completion { content, metadata })
}
