//! Search-and-summarize agent
//!
//! With `use_tools` set and a search endpoint configured, the agent first
//! queries a SearxNG-compatible JSON API (`GET {SEARCH_API_URL}/search?q=..&format=json`)
//! and hands the top results to the model as context.

use async_trait::async_trait;
use serde::Deserialize;

use crate::client::{ChatMessage, LlmClient};
use crate::{Agent, AgentConfig, AgentError, AgentResponse, AgentResult};

const SYSTEM_PROMPT: &str = "You are a research assistant. Summarize what is known about \
the user's topic. When sources are provided, rely on them and cite their URLs.";

/// 最多送入模型的搜索结果数
const MAX_SOURCES: usize = 5;

const PROMPT_PREFIX: &str = "Search for information about: ";
const PROMPT_SUFFIX: &str = ". Provide a comprehensive summary with key findings.";

/// Wrap a user query in the search/summary instruction
pub fn search_prompt(query: &str) -> String {
    format!("{PROMPT_PREFIX}{query}{PROMPT_SUFFIX}")
}

/// The user query inside a [`search_prompt`]; other prompts are returned unchanged
pub fn query_from_prompt(prompt: &str) -> &str {
    prompt
        .strip_prefix(PROMPT_PREFIX)
        .and_then(|rest| rest.strip_suffix(PROMPT_SUFFIX))
        .unwrap_or(prompt)
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize)]
struct SearchResults {
    #[serde(default)]
    results: Vec<SearchHit>,
}

/// Web search + summary agent
#[derive(Debug, Clone)]
pub struct SearchAgent {
    client: LlmClient,
    search_url: Option<String>,
}

impl SearchAgent {
    pub fn new(config: &AgentConfig) -> AgentResult<Self> {
        Ok(Self {
            client: LlmClient::new(config)?,
            search_url: config
                .search_url
                .as_ref()
                .map(|u| u.trim_end_matches('/').to_string()),
        })
    }

    async fn web_search(&self, base: &str, query: &str) -> AgentResult<Vec<SearchHit>> {
        let resp = self
            .client
            .http()
            .get(format!("{base}/search"))
            .query(&[("q", query), ("format", "json")])
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

        let parsed: SearchResults = resp.json().await?;
        Ok(parsed.results.into_iter().take(MAX_SOURCES).collect())
    }
}

/// Render search hits as a numbered context block for the model
pub fn render_sources(hits: &[SearchHit]) -> String {
    hits.iter()
        .enumerate()
        .map(|(i, hit)| format!("[{}] {} ({})\n{}", i + 1, hit.title, hit.url, hit.content))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[async_trait]
impl Agent for SearchAgent {
    async fn execute(&self, prompt: &str, use_tools: bool) -> AgentResult<AgentResponse> {
        let hits = match (&self.search_url, use_tools) {
            (Some(base), true) => match self.web_search(base, query_from_prompt(prompt)).await {
                Ok(hits) => hits,
                Err(e) => {
                    // 搜索失败时退化为纯模型回答
                    tracing::warn!(error = %e, "Web search failed, answering without sources");
                    Vec::new()
                }
            },
            _ => Vec::new(),
        };

        let user_content = if hits.is_empty() {
            prompt.to_string()
        } else {
            format!("{prompt}\n\nSources:\n{}", render_sources(&hits))
        };
        let messages = [ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(user_content)];

        match self.client.complete(&messages).await {
            Ok(completion) => {
                let mut metadata = completion.metadata;
                metadata.insert("tools_used".to_string(), serde_json::json!(hits.len()));
                metadata.insert(
                    "sources".to_string(),
                    serde_json::json!(hits.iter().map(|h| h.url.clone()).collect::<Vec<_>>()),
                );
                Ok(AgentResponse::success(completion.content, metadata))
            }
            Err(e @ AgentError::Upstream { .. }) => Ok(AgentResponse::failure(e.to_string())),
            Err(e) => Err(e),
        }
    }

    fn capabilities(&self) -> Vec<String> {
        let mut caps = vec!["summarization".to_string()];
        if self.search_url.is_some() {
            caps.insert(0, "web_search".to_string());
            caps.push("source_citation".to_string());
        }
        caps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_sources_numbers_hits() {
        let hits = vec![
            SearchHit {
                title: "Tacos".to_string(),
                url: "https://a.example".to_string(),
                content: "Fish tacos are popular".to_string(),
            },
            SearchHit {
                title: "Fries".to_string(),
                url: "https://b.example".to_string(),
                content: String::new(),
            },
        ];
        let rendered = render_sources(&hits);
        assert!(rendered.starts_with("[1] Tacos (https://a.example)"));
        assert!(rendered.contains("[2] Fries (https://b.example)"));
    }

    #[test]
    fn test_query_from_prompt() {
        assert_eq!(query_from_prompt(&search_prompt("best tacos")), "best tacos");
        // 非模板 prompt 原样使用
        assert_eq!(query_from_prompt("food trucks in NYC"), "food trucks in NYC");
    }

    #[test]
    fn test_capabilities_depend_on_search_endpoint() {
        let config = AgentConfig::new("http://localhost:1", "key", "m");
        let plain = SearchAgent::new(&config).unwrap();
        assert_eq!(plain.capabilities(), vec!["summarization".to_string()]);

        let with_tools = SearchAgent::new(&config.with_search_url("http://localhost:2/")).unwrap();
        assert_eq!(with_tools.capabilities()[0], "web_search");
        assert_eq!(with_tools.search_url.as_deref(), Some("http://localhost:2"));
    }
}
