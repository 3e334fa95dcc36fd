//! Agent Gateway
//!
//! 把 /api/chat、/api/search 请求转交给外部代理。
//!
//! - 每种代理 (chat / search) 在首次使用时构造，之后整个进程复用
//! - 构造或执行失败都转换为 `success: false` 的响应，从不向传输层抛错

use std::fmt;
use std::sync::Arc;

use shared::models::{
    AgentCapabilities, CapabilitiesResponse, ChatRequest, ChatResponse, SearchRequest,
    SearchResponse,
};
use tokio::sync::OnceCell;
use truck_agents::{Agent, AgentConfig, AgentResult, ChatAgent, SearchAgent, search_prompt};

/// Which agent a request is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentKind {
    Chat,
    Search,
}

impl AgentKind {
    /// `"search"` selects the search agent; anything else falls through to chat.
    ///
    /// Unknown values are never rejected: they are answered by the chat agent,
    /// constructing it first if no request has done so yet.
    pub fn from_request(agent_type: &str) -> Self {
        if agent_type == "search" {
            Self::Search
        } else {
            Self::Chat
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Search => "search",
        }
    }
}

/// Builds agent instances on demand
pub trait AgentFactory: Send + Sync {
    fn build(&self, kind: AgentKind) -> AgentResult<Arc<dyn Agent>>;
}

/// Factory for the LLM-backed agents from `truck-agents`
pub struct LlmAgentFactory {
    config: AgentConfig,
}

impl LlmAgentFactory {
    pub fn new(config: AgentConfig) -> Self {
        Self { config }
    }
}

impl AgentFactory for LlmAgentFactory {
    fn build(&self, kind: AgentKind) -> AgentResult<Arc<dyn Agent>> {
        let agent: Arc<dyn Agent> = match kind {
            AgentKind::Chat => Arc::new(ChatAgent::new(&self.config)?),
            AgentKind::Search => Arc::new(SearchAgent::new(&self.config)?),
        };
        Ok(agent)
    }
}

/// Lazily-initialized, process-lifetime agents
#[derive(Clone)]
pub struct AgentGateway {
    factory: Arc<dyn AgentFactory>,
    chat: Arc<OnceCell<Arc<dyn Agent>>>,
    search: Arc<OnceCell<Arc<dyn Agent>>>,
}

impl fmt::Debug for AgentGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentGateway")
            .field("chat_initialized", &self.chat.initialized())
            .field("search_initialized", &self.search.initialized())
            .finish()
    }
}

impl AgentGateway {
    pub fn new(factory: Arc<dyn AgentFactory>) -> Self {
        Self {
            factory,
            chat: Arc::new(OnceCell::new()),
            search: Arc::new(OnceCell::new()),
        }
    }

    pub fn from_config(config: AgentConfig) -> Self {
        Self::new(Arc::new(LlmAgentFactory::new(config)))
    }

    /// Get the agent for `kind`, constructing it on first use.
    ///
    /// A failed construction leaves the cell empty, so the next request retries.
    pub async fn agent(&self, kind: AgentKind) -> AgentResult<Arc<dyn Agent>> {
        let cell = match kind {
            AgentKind::Chat => &self.chat,
            AgentKind::Search => &self.search,
        };
        let agent = cell
            .get_or_try_init(|| async {
                tracing::info!(agent = kind.as_str(), "Initializing agent");
                self.factory.build(kind)
            })
            .await?;
        Ok(agent.clone())
    }

    pub async fn chat(&self, request: ChatRequest) -> ChatResponse {
        let kind = AgentKind::from_request(&request.agent_type);

        let result = async {
            let agent = self.agent(kind).await?;
            let response = agent.execute(&request.message, false).await?;
            AgentResult::Ok((response, agent.capabilities()))
        }
        .await;

        match result {
            Ok((response, capabilities)) => ChatResponse {
                success: response.success,
                response: response.content,
                agent_type: request.agent_type,
                capabilities,
                metadata: response.metadata,
                error: response.error,
            },
            Err(e) => {
                tracing::error!(agent = kind.as_str(), error = %e, "Error in chat endpoint");
                ChatResponse::failure(request.agent_type, e.to_string())
            }
        }
    }

    pub async fn search(&self, request: SearchRequest) -> SearchResponse {
        let prompt = search_prompt(&request.query);

        let result = async {
            let agent = self.agent(AgentKind::Search).await?;
            agent.execute(&prompt, true).await
        }
        .await;

        match result {
            Ok(response) if response.success => {
                let sources_count = response.tools_used();
                SearchResponse {
                    success: true,
                    query: request.query,
                    summary: response.content,
                    search_results: Some(response.metadata),
                    sources_count,
                    error: None,
                }
            }
            Ok(response) => SearchResponse::failure(request.query, response.error),
            Err(e) => {
                tracing::error!(error = %e, "Error in search endpoint");
                SearchResponse::failure(request.query, Some(e.to_string()))
            }
        }
    }

    pub async fn capabilities(&self) -> CapabilitiesResponse {
        let result = async {
            let search = self.agent(AgentKind::Search).await?;
            let chat = self.agent(AgentKind::Chat).await?;
            AgentResult::Ok(AgentCapabilities {
                search_agent: search.capabilities(),
                chat_agent: chat.capabilities(),
            })
        }
        .await;

        match result {
            Ok(capabilities) => CapabilitiesResponse {
                success: true,
                capabilities: Some(capabilities),
                error: None,
            },
            Err(e) => {
                tracing::error!(error = %e, "Error getting capabilities");
                CapabilitiesResponse {
                    success: false,
                    capabilities: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    /// Release agents at process shutdown
    pub fn shutdown(&self) {
        for (name, cell) in [("chat", &self.chat), ("search", &self.search)] {
            if cell.initialized() {
                tracing::info!(agent = name, "Agent released");
            }
        }
    }
}
