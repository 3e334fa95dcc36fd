/// 代理配置 - 模型服务与搜索工具的连接参数
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | LLM_BASE_URL | https://api.openai.com/v1 | OpenAI 兼容服务地址 |
/// | LLM_API_KEY | (无) | API 密钥，缺失时代理无法构造 |
/// | LLM_MODEL | gpt-4o-mini | 模型名称 |
/// | SEARCH_API_URL | (无) | SearxNG 兼容搜索地址，缺失时搜索代理不使用工具 |
/// | AGENT_TIMEOUT_SECS | 60 | 单次请求超时(秒) |
#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub search_url: Option<String>,
    pub timeout_secs: u64,
}

impl AgentConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("LLM_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".into()),
            api_key: std::env::var("LLM_API_KEY").ok().filter(|k| !k.is_empty()),
            model: std::env::var("LLM_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into()),
            search_url: std::env::var("SEARCH_API_URL").ok().filter(|u| !u.is_empty()),
            timeout_secs: std::env::var("AGENT_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }

    /// Explicit configuration, mostly for tests and embedding
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: Some(api_key.into()),
            model: model.into(),
            search_url: None,
            timeout_secs: 60,
        }
    }

    pub fn with_search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = Some(url.into());
        self
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
